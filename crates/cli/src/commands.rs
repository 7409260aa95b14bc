use clap::Subcommand;
use uuid::Uuid;

/// Organization queried when none is given.
pub const DEFAULT_ORGANIZATION: &str = "b8d34b26-7a37-43e3-9256-b741ca4129c8";

#[derive(Subcommand)]
pub enum Commands {
    /// Print the joined menu item query and its parameters
    Sql {
        #[arg(long, default_value = DEFAULT_ORGANIZATION, help = "Organization id")]
        organization: Uuid,

        /// SQL dialect: "postgres" or "mysql"
        #[arg(long, default_value = "postgres")]
        dialect: String,
    },
    /// Replay aliased rows from a JSON file and print the collapsed menu items
    Query {
        #[arg(long, help = "JSON file holding an array of aliased rows")]
        rows: String,

        #[arg(long, default_value = DEFAULT_ORGANIZATION, help = "Organization id")]
        organization: Uuid,

        /// SQL dialect: "postgres" or "mysql"
        #[arg(long, default_value = "postgres")]
        dialect: String,

        #[arg(
            long,
            help = "If set, prints each menu item as a JSON line instead of logging it"
        )]
        json: bool,
    },
}

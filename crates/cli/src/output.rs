use crate::error::CliError;
use catalog::menu::MenuItem;
use model::core::value::Value;
use tracing::info;

/// One `$n = literal` line per positional parameter.
pub fn format_params(params: &[Value]) -> String {
    params
        .iter()
        .enumerate()
        .map(|(i, value)| format!("${} = {value}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_sql(sql: &str, params: &[Value]) {
    println!("{sql}");
    if !params.is_empty() {
        println!("{}", format_params(params));
    }
}

pub fn print_item(item: &MenuItem, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string(item)?);
        return Ok(());
    }

    info!(
        "[FOUND ITEM] id={:?} name={:?} status={:?} type={:?} price={:?} images={}",
        item.id,
        item.name,
        item.status,
        item.item_type,
        item.price.as_ref().map(ToString::to_string),
        item.images.len()
    );
    for image in &item.images {
        info!("[ITEM IMAGE] {:?}", image);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::format_params;
    use model::core::value::Value;

    #[test]
    fn test_format_params() {
        let params = vec![Value::String("O'Hare".into()), Value::Int(3)];

        assert_eq!(format_params(&params), "$1 = 'O''Hare'\n$2 = 3");
        assert_eq!(format_params(&[]), "");
    }
}

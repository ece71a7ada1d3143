use crate::commands::CommandError;
use crate::commands::base_commands::CatalogFormat;
use crate::commands::report_format::format_catalog_table;
use crate::domain::procedure::PROCEDURE_CATALOG;

pub fn catalog_command(format: CatalogFormat) -> Result<(), CommandError> {
    let text = match format {
        CatalogFormat::Table => format_catalog_table(&PROCEDURE_CATALOG),
        CatalogFormat::Yaml => serde_yaml::to_string(&PROCEDURE_CATALOG)
            .map_err(|e| CommandError::new("serialize procedure catalog", e))?,
        CatalogFormat::Json => serde_json::to_string_pretty(&PROCEDURE_CATALOG)
            .map_err(|e| CommandError::new("serialize procedure catalog", e))?,
    };
    println!("{}", text.trim_end());
    Ok(())
}

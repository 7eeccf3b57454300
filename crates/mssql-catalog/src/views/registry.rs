//! Runtime index of every catalog view, for callers that pick a view by name.

use serde_json::Value;

use super::*;
use crate::error::{CatalogError, Result};
use crate::reader::RowReader;

/// Name, query and materializer of one catalog view.
#[derive(Clone, Copy)]
pub struct ViewInfo {
    /// Fully qualified name, e.g. `sys.dm_tran_locks`.
    pub name: &'static str,
    pub sql: &'static str,
    pub columns: &'static [&'static str],
    /// Reads every row of a result set into JSON objects.
    pub read_json: fn(RowReader) -> Result<Vec<Value>>,
}

impl std::fmt::Debug for ViewInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewInfo")
            .field("name", &self.name)
            .field("columns", &self.columns.len())
            .finish()
    }
}

impl ViewInfo {
    fn of<V: CatalogView>() -> Self {
        Self {
            name: V::VIEW,
            sql: V::SQL,
            columns: V::COLUMNS,
            read_json: read_json::<V>,
        }
    }

    /// Name without the schema prefix.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit('.').next().unwrap_or(self.name)
    }
}

fn read_json<V: CatalogView>(reader: RowReader) -> Result<Vec<Value>> {
    V::from_reader(reader)
        .into_data()?
        .into_iter()
        .map(|row| serde_json::to_value(row).map_err(CatalogError::from))
        .collect()
}

/// Every registered view, sorted by name.
pub fn all() -> Vec<ViewInfo> {
    let mut list = vec![
        ViewInfo::of::<AllParametersReader>(),
        ViewInfo::of::<CheckConstraintsReader>(),
        ViewInfo::of::<ColumnsReader>(),
        ViewInfo::of::<ComputedColumnsReader>(),
        ViewInfo::of::<DatabasesReader>(),
        ViewInfo::of::<DefaultConstraintsReader>(),
        ViewInfo::of::<DmDbXtpCheckpointStatsReader>(),
        ViewInfo::of::<DmExecQueryStatsReader>(),
        ViewInfo::of::<DmExecRequestsReader>(),
        ViewInfo::of::<DmResourceGovernorResourcePoolsReader>(),
        ViewInfo::of::<DmTranLocksReader>(),
        ViewInfo::of::<ForeignKeyColumnsReader>(),
        ViewInfo::of::<ForeignKeysReader>(),
        ViewInfo::of::<IdentityColumnsReader>(),
        ViewInfo::of::<IndexColumnsReader>(),
        ViewInfo::of::<IndexesReader>(),
        ViewInfo::of::<MaskedColumnsReader>(),
        ViewInfo::of::<ObjectsReader>(),
        ViewInfo::of::<QueryStoreRuntimeStatsReader>(),
        ViewInfo::of::<SchemasReader>(),
        ViewInfo::of::<SystemColumnsReader>(),
        ViewInfo::of::<SystemObjectsReader>(),
        ViewInfo::of::<SystemViewsReader>(),
        ViewInfo::of::<TablesReader>(),
        ViewInfo::of::<TypesReader>(),
        ViewInfo::of::<ViewsReader>(),
        ViewInfo::of::<XmlSchemaTypesReader>(),
    ];
    list.sort_by_key(|v| v.name);
    list
}

/// Look a view up by `sys.name`, `[sys].[name]` or bare `name`, ignoring case.
pub fn find(name: &str) -> Result<ViewInfo> {
    let normalized: String = name
        .trim()
        .chars()
        .filter(|c| *c != '[' && *c != ']')
        .collect::<String>()
        .to_ascii_lowercase();
    let wanted = normalized.strip_prefix("sys.").unwrap_or(&normalized);

    all()
        .into_iter()
        .find(|v| v.short_name() == wanted)
        .ok_or_else(|| CatalogError::UnknownView(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SqlValue;

    /// Column names of the SELECT list, in order.
    fn select_list(sql: &str) -> Vec<String> {
        let start = sql.find("SELECT").expect("SELECT") + "SELECT".len();
        let end = sql.rfind("\nFROM").expect("FROM");
        sql[start..end]
            .split('\n')
            .map(|item| {
                let open = item.rfind('[').expect("bracketed column");
                let close = item.rfind(']').expect("bracketed column");
                item[open + 1..close].to_string()
            })
            .collect()
    }

    #[test]
    fn test_registry_is_sorted_and_complete() {
        let views = all();
        assert_eq!(views.len(), 27);
        let names: Vec<_> = views.iter().map(|v| v.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"sys.all_parameters"));
        assert!(names.contains(&"sys.dm_tran_locks"));
        assert!(names.contains(&"sys.xml_schema_types"));
    }

    #[test]
    fn test_every_view_columns_match_its_sql() {
        for view in all() {
            let selected = select_list(view.sql);
            assert_eq!(
                selected.len(),
                view.columns.len(),
                "{}: ordinal count differs from SELECT list",
                view.name
            );
            for (ordinal, (sql_name, column)) in selected.iter().zip(view.columns).enumerate() {
                assert!(
                    sql_name.eq_ignore_ascii_case(column),
                    "{}: ordinal {} is {} in SQL but {} in the reader",
                    view.name,
                    ordinal,
                    sql_name,
                    column
                );
            }
        }
    }

    #[test]
    fn test_every_view_queries_its_own_view() {
        for view in all() {
            let from = format!("FROM [sys].[{}]", view.short_name());
            assert!(view.sql.contains(&from), "{} does not select {}", view.name, from);
        }
    }

    #[test]
    fn test_find_accepts_name_forms() {
        assert_eq!(find("sys.dm_tran_locks").unwrap().name, "sys.dm_tran_locks");
        assert_eq!(find("[sys].[Masked_Columns]").unwrap().name, "sys.masked_columns");
        assert_eq!(find("SCHEMAS").unwrap().name, "sys.schemas");
        assert!(matches!(find("sys.nope"), Err(CatalogError::UnknownView(_))));
    }

    #[test]
    fn test_read_json_uses_rust_field_names() {
        let info = find("sys.schemas").unwrap();
        let reader = RowReader::new(
            vec!["name".into(), "schema_id".into(), "principal_id".into()],
            vec![vec![SqlValue::String("dbo".into()), SqlValue::I32(1), SqlValue::Null]],
        );
        let rows = (info.read_json)(reader).unwrap();
        assert_eq!(
            rows,
            vec![serde_json::json!({"name": "dbo", "schema_id": 1, "principal_id": null})]
        );
    }
}

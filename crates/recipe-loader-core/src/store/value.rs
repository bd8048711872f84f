use crate::model::{Nutrients, Serves};
use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Type, Value as SqlValue, ValueRef},
    Row,
};

impl ToSql for Serves {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Serves::Text(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Serves::Number(n) => {
                match n.as_i64() {
                    Some(i) => Ok(ToSqlOutput::Owned(SqlValue::Integer(i))),
                    // Floats and u64 above i64::MAX; a column of TEXT would read back as `Serves::Text`.
                    None => n
                        .as_f64()
                        .map(|f| ToSqlOutput::Owned(SqlValue::Real(f)))
                        .ok_or_else(|| {
                            rusqlite::Error::ToSqlConversionFailure(
                                format!("serves value {n} is not representable").into(),
                            )
                        }),
                }
            }
        }
    }
}

impl FromSql for Serves {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(|s| Serves::Text(s.to_owned()))
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            ValueRef::Integer(i) => Ok(Serves::Number(i.into())),
            ValueRef::Real(f) => serde_json::Number::from_f64(f)
                .map(Serves::Number)
                .ok_or(FromSqlError::InvalidType),
            ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

/// Nutrients are kept as a JSON document in a TEXT column.
pub(crate) fn nutrients_to_sql(nutrients: Option<&Nutrients>) -> crate::Result<Option<String>> {
    nutrients
        .map(serde_json::to_string)
        .transpose()
        .map_err(crate::RecipeError::from)
}

pub(crate) fn nutrients_from_row(row: &Row, index: usize) -> rusqlite::Result<Option<Nutrients>> {
    let text: Option<String> = row.get(index)?;
    text.map(|s| serde_json::from_str(&s))
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

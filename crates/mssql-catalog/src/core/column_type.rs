//! Column type classification by SQL Server system type id.

use serde::{Deserialize, Serialize};

/// The built-in SQL Server type a column is stored as.
///
/// Most types follow from `system_type_id` alone. Two ids are shared:
/// `nvarchar` (231) also carries `sysname`, and 240 carries every CLR type
/// (`geometry`, `geography`, `hierarchyid` and user assemblies). Those need
/// the type row to tell them apart; see
/// [`Catalog::system_column_type`](crate::Catalog::system_column_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemColumnType {
    Unknown,
    Image,
    Text,
    UniqueIdentifier,
    Date,
    Time,
    DateTime2,
    DateTimeOffset,
    TinyInt,
    SmallInt,
    Int,
    SmallDateTime,
    Real,
    Money,
    DateTime,
    Float,
    SqlVariant,
    NText,
    Bit,
    Decimal,
    Numeric,
    SmallMoney,
    BigInt,
    VarBinary,
    VarChar,
    Binary,
    Char,
    Timestamp,
    NVarChar,
    NChar,
    Xml,
    SysName,
    Geometry,
    Geography,
    HierarchyId,
}

impl SystemColumnType {
    /// `system_type_id` of `nvarchar` and `sysname`.
    pub const NVARCHAR_TYPE_ID: u8 = 231;

    /// `system_type_id` shared by all CLR types.
    pub const CLR_TYPE_ID: u8 = 240;

    /// Classify by `system_type_id`. CLR types map to `Unknown` and
    /// `sysname` maps to `NVarChar`.
    pub fn from_system_type_id(system_type_id: u8) -> Self {
        use SystemColumnType::*;

        match system_type_id {
            34 => Image,
            35 => Text,
            36 => UniqueIdentifier,
            40 => Date,
            41 => Time,
            42 => DateTime2,
            43 => DateTimeOffset,
            48 => TinyInt,
            52 => SmallInt,
            56 => Int,
            58 => SmallDateTime,
            59 => Real,
            60 => Money,
            61 => DateTime,
            62 => Float,
            98 => SqlVariant,
            99 => NText,
            104 => Bit,
            106 => Decimal,
            108 => Numeric,
            122 => SmallMoney,
            127 => BigInt,
            165 => VarBinary,
            167 => VarChar,
            173 => Binary,
            175 => Char,
            189 => Timestamp,
            231 => NVarChar,
            239 => NChar,
            241 => Xml,
            _ => Unknown,
        }
    }

    /// Types in the `sys` schema that share a `system_type_id` with others.
    pub fn from_sys_type_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sysname" => Some(SystemColumnType::SysName),
            "geometry" => Some(SystemColumnType::Geometry),
            "geography" => Some(SystemColumnType::Geography),
            "hierarchyid" => Some(SystemColumnType::HierarchyId),
            _ => None,
        }
    }

    /// Whether `system_type_id` alone does not decide the type.
    pub fn needs_type_row(system_type_id: u8) -> bool {
        system_type_id == Self::NVARCHAR_TYPE_ID || system_type_id == Self::CLR_TYPE_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_type_ids() {
        assert_eq!(SystemColumnType::from_system_type_id(56), SystemColumnType::Int);
        assert_eq!(SystemColumnType::from_system_type_id(167), SystemColumnType::VarChar);
        assert_eq!(SystemColumnType::from_system_type_id(241), SystemColumnType::Xml);
        assert_eq!(SystemColumnType::from_system_type_id(1), SystemColumnType::Unknown);
    }

    #[test]
    fn test_shared_type_ids_need_type_row() {
        assert!(SystemColumnType::needs_type_row(231));
        assert!(SystemColumnType::needs_type_row(240));
        assert!(!SystemColumnType::needs_type_row(56));
        assert_eq!(SystemColumnType::from_system_type_id(240), SystemColumnType::Unknown);
    }

    #[test]
    fn test_sys_type_names() {
        assert_eq!(
            SystemColumnType::from_sys_type_name("HierarchyId"),
            Some(SystemColumnType::HierarchyId)
        );
        assert_eq!(
            SystemColumnType::from_sys_type_name("sysname"),
            Some(SystemColumnType::SysName)
        );
        assert_eq!(SystemColumnType::from_sys_type_name("nvarchar"), None);
    }
}

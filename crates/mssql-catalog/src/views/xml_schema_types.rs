//! `sys.xml_schema_types`.

catalog_view! {
    /// Reader over `sys.xml_schema_types`, the type components of XML schema collections.
    reader XmlSchemaTypesReader;
    /// One row of `sys.xml_schema_types`.
    data XmlSchemaType;
    view "sys.xml_schema_types";
    alias "xst";
    sql "SELECT xst.[xml_component_id]
      ,xst.[xml_collection_id]
      ,xst.[xml_namespace_id]
      ,xst.[is_qualified]
      ,xst.[name]
      ,xst.[symbol_space]
      ,xst.[symbol_space_desc]
      ,xst.[kind]
      ,xst.[kind_desc]
      ,xst.[derivation]
      ,xst.[derivation_desc]
      ,xst.[base_xml_component_id]
      ,xst.[scoping_xml_component_id]
      ,xst.[is_abstract]
      ,xst.[allows_mixed_content]
      ,xst.[is_extension_blocked]
      ,xst.[is_restriction_blocked]
      ,xst.[is_substitution_blocked]
      ,xst.[is_final_extension]
      ,xst.[is_final_restriction]
      ,xst.[is_final_list_member]
      ,xst.[is_final_union_member]
FROM [sys].[xml_schema_types] xst";
    columns {
        xml_component_id: i32 => XML_COMPONENT_ID,
        xml_collection_id: i32 => XML_COLLECTION_ID,
        xml_namespace_id: i32 => XML_NAMESPACE_ID,
        is_qualified: bool => IS_QUALIFIED,
        name: Option<String> => NAME,
        symbol_space: String => SYMBOL_SPACE,
        symbol_space_desc: String => SYMBOL_SPACE_DESC,
        kind: String => KIND,
        kind_desc: String => KIND_DESC,
        derivation: String => DERIVATION,
        derivation_desc: String => DERIVATION_DESC,
        base_xml_component_id: Option<i32> => BASE_XML_COMPONENT_ID,
        scoping_xml_component_id: Option<i32> => SCOPING_XML_COMPONENT_ID,
        is_abstract: bool => IS_ABSTRACT,
        allows_mixed_content: bool => ALLOWS_MIXED_CONTENT,
        is_extension_blocked: bool => IS_EXTENSION_BLOCKED,
        is_restriction_blocked: bool => IS_RESTRICTION_BLOCKED,
        is_substitution_blocked: bool => IS_SUBSTITUTION_BLOCKED,
        is_final_extension: bool => IS_FINAL_EXTENSION,
        is_final_restriction: bool => IS_FINAL_RESTRICTION,
        is_final_list_member: bool => IS_FINAL_LIST_MEMBER,
        is_final_union_member: bool => IS_FINAL_UNION_MEMBER,
    }
}

use serde::Deserialize;

/// A CRM lead as returned by `crm.lead.get`.
///
/// Every field is optional: Bitrix omits or nulls fields that were never
/// filled in, and the formatter substitutes a placeholder for them. Unknown
/// fields in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lead {
    #[serde(rename = "ID", default)]
    pub id: Option<String>,

    #[serde(rename = "TITLE", default)]
    pub title: Option<String>,

    /// Given name.
    #[serde(rename = "NAME", default)]
    pub name: Option<String>,

    /// Patronymic.
    #[serde(rename = "SECOND_NAME", default)]
    pub second_name: Option<String>,

    #[serde(rename = "LAST_NAME", default)]
    pub last_name: Option<String>,

    #[serde(rename = "COMPANY_TITLE", default)]
    pub company_title: Option<String>,

    /// `"Y"` / `"N"` flag for a returning customer.
    #[serde(rename = "IS_RETURN_CUSTOMER", default)]
    pub is_return_customer: Option<String>,

    #[serde(rename = "SOURCE_DESCRIPTION", default)]
    pub source_description: Option<String>,

    #[serde(rename = "COMMENTS", default)]
    pub comments: Option<String>,
}

/// Wrapper envelope of a successful `crm.lead.get` response.
#[derive(Debug, Deserialize)]
pub struct LeadEnvelope {
    pub result: Lead,
}

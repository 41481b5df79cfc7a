use crate::error::YpayError;

/// Rows requested per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Parameters for a single `getYpay` request.
///
/// Filters are sent verbatim: `name` is an exact merchant-name match
/// (`aflt_nm`) and `field` a category match (`fld`), both applied server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantQuery {
    pub page_no: u32,
    pub num_of_rows: u32,
    pub field: Option<String>,
    pub name: Option<String>,
}

impl Default for MerchantQuery {
    fn default() -> Self {
        Self::page(1)
    }
}

impl MerchantQuery {
    #[must_use]
    pub fn page(page_no: u32) -> Self {
        Self {
            page_no,
            num_of_rows: DEFAULT_PAGE_SIZE,
            field: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_rows(mut self, num_of_rows: u32) -> Self {
        self.num_of_rows = num_of_rows;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`YpayError::InvalidQuery`] if the page number or page size is zero.
    pub fn validate(&self) -> Result<(), YpayError> {
        if self.page_no == 0 {
            return Err(YpayError::InvalidQuery(
                "pageNo must be at least 1".to_string(),
            ));
        }
        if self.num_of_rows == 0 {
            return Err(YpayError::InvalidQuery(
                "numOfRows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Query parameters other than the service key, in wire order.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("pageNo", self.page_no.to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
        ];
        if let Some(field) = &self.field {
            params.push(("fld", field.clone()));
        }
        if let Some(name) = &self.name {
            params.push(("aflt_nm", name.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_page_of_a_thousand() {
        let q = MerchantQuery::default();
        assert_eq!(q.page_no, 1);
        assert_eq!(q.num_of_rows, 1000);
        assert!(q.field.is_none());
        assert!(q.name.is_none());
    }

    #[test]
    fn params_omit_absent_filters() {
        let params = MerchantQuery::page(3).with_rows(50).params();
        assert_eq!(
            params,
            vec![("pageNo", "3".to_string()), ("numOfRows", "50".to_string())]
        );
    }

    #[test]
    fn params_include_filters_verbatim() {
        let params = MerchantQuery::page(1)
            .with_field("음식점")
            .with_name(" 맛있는집 ")
            .params();
        assert!(params.contains(&("fld", "음식점".to_string())));
        assert!(params.contains(&("aflt_nm", " 맛있는집 ".to_string())));
    }

    #[test]
    fn validate_rejects_zero_page() {
        let err = MerchantQuery::page(0).validate().unwrap_err();
        assert!(matches!(err, YpayError::InvalidQuery(_)));
    }

    #[test]
    fn validate_rejects_zero_rows() {
        let err = MerchantQuery::page(1).with_rows(0).validate().unwrap_err();
        assert!(matches!(err, YpayError::InvalidQuery(_)));
    }

    #[test]
    fn validate_accepts_positive_values() {
        assert!(MerchantQuery::page(2).with_rows(1).validate().is_ok());
    }
}

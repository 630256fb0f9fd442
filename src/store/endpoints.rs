// src/store/endpoints.rs

//! Route table of each resource.
//!
//! Paths are relative to `api.base_url`; `{id}` in a template is replaced by
//! the entity identity. A missing route means the resource does not support
//! that operation.

/// Routes of one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub list: Option<String>,
    pub list_all: Option<String>,
    pub detail: Option<String>,
    pub create: Option<String>,
    pub update: Option<String>,
    pub delete: Option<String>,
}

impl Endpoints {
    /// Conventional `GET/POST /{base}` and `GET/PUT/DELETE /{base}/{id}`.
    pub fn rest(base: &str) -> Self {
        let item = format!("{base}/{{id}}");
        Self {
            list: Some(base.to_string()),
            list_all: None,
            detail: Some(item.clone()),
            create: Some(base.to_string()),
            update: Some(item.clone()),
            delete: Some(item),
        }
    }

    /// Listing and detail only.
    pub fn read_only(base: &str) -> Self {
        Self {
            list: Some(base.to_string()),
            detail: Some(format!("{base}/{{id}}")),
            ..Self::default()
        }
    }

    pub fn articles() -> Self {
        Self::rest("/article")
    }

    pub fn services() -> Self {
        Self {
            list: Some("/services".to_string()),
            list_all: Some("/services/all".to_string()),
            detail: Some("/services/detail/{id}".to_string()),
            create: Some("/services/create".to_string()),
            update: Some("/services/update/{id}".to_string()),
            delete: Some("/services/delete/{id}".to_string()),
        }
    }

    pub fn jobs() -> Self {
        Self::rest("/career/jobs")
    }

    pub fn applications() -> Self {
        Self::read_only("/job-applications")
    }

    /// Contact inquiries are read-only but deletable.
    pub fn contacts() -> Self {
        Self {
            delete: Some("/contact/{id}".to_string()),
            ..Self::read_only("/contact")
        }
    }

    pub fn faqs() -> Self {
        Self::rest("/faq")
    }

    pub fn footer() -> Self {
        Self::rest("/footer")
    }

    /// Substitute `{id}` in a route template.
    ///
    /// The id is percent-encoded so it always stays a single path segment.
    pub fn fill(template: &str, id: &str) -> String {
        template.replace("{id}", &urlencoding::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_routes() {
        let routes = Endpoints::jobs();
        assert_eq!(routes.list.as_deref(), Some("/career/jobs"));
        assert_eq!(
            Endpoints::fill(routes.update.as_deref().unwrap(), "j1"),
            "/career/jobs/j1"
        );
        assert!(routes.list_all.is_none());
    }

    #[test]
    fn test_service_routes() {
        let routes = Endpoints::services();
        assert_eq!(
            Endpoints::fill(routes.delete.as_deref().unwrap(), "s9"),
            "/services/delete/s9"
        );
        assert_eq!(routes.list_all.as_deref(), Some("/services/all"));
    }

    #[test]
    fn test_read_only_routes() {
        let routes = Endpoints::applications();
        assert!(routes.create.is_none());
        assert!(routes.update.is_none());
        assert!(routes.delete.is_none());

        let routes = Endpoints::contacts();
        assert!(routes.create.is_none());
        assert_eq!(routes.delete.as_deref(), Some("/contact/{id}"));
    }

    #[test]
    fn test_fill_encodes_id() {
        assert_eq!(
            Endpoints::fill("/article/{id}", "a/b?draft=1#top"),
            "/article/a%2Fb%3Fdraft%3D1%23top"
        );
        assert_eq!(
            Endpoints::fill("/faq/{id}", "65f1c0ffee"),
            "/faq/65f1c0ffee"
        );
    }
}

use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render both variants of the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<RenderedTemplate>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: RenderedTemplate,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// An email template with an HTML and a plain text variant.
pub trait Template: Serialize {
    const NAME: &'static str;
    const HTML: &'static str;
    const TEXT: &'static str;

    fn html_name() -> String {
        format!("{}.html", Self::NAME)
    }

    fn text_name() -> String {
        format!("{}.txt", Self::NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub text: String,
    pub html: String,
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $name:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $name;
                const HTML: &'static str = include_str!(concat!("../templates/", $name, ".html"));
                const TEXT: &'static str = include_str!(concat!("../templates/", $name, ".txt"));
            }
        )*

        /// `(name, html, text)` of every template
        pub const TEMPLATES: &[(&str, &str, &str)] = &[
            $( ($ident::NAME, $ident::HTML, $ident::TEXT) ),*
        ];
    };
}

templates! {
    ContactNotificationTemplate("contact_notification"),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactNotificationTemplate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub interest: String,
    pub message: String,
    pub organization: String,
    pub website: String,
}

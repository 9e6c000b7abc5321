use std::sync::Arc;

use anyhow::Context;
use inquiry_templates_contracts::{
    RenderedTemplate, Template, TemplateService, BASE_TEMPLATE, TEMPLATES,
};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", BASE_TEMPLATE)
            .context("Failed to load base template")?;

        for &(name, html, text) in TEMPLATES {
            tera.add_raw_template(&format!("{name}.html"), html)
                .with_context(|| format!("Failed to load html template {name}"))?;
            tera.add_raw_template(&format!("{name}.txt"), text)
                .with_context(|| format!("Failed to load text template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    #[tracing::instrument(level = "trace", skip_all, fields(template = T::NAME))]
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<RenderedTemplate> {
        let context = tera::Context::from_serialize(template)?;
        Ok(RenderedTemplate {
            text: self.tera.render(&T::text_name(), &context)?,
            html: self.tera.render(&T::html_name(), &context)?,
        })
    }
}

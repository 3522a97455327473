use handlebars::Handlebars;
use serde_json::Value;

use crate::{config::Template, mailer::Mail, Error, Result};

lazy_static! {
    static ref HANDLEBARS_HTML: Handlebars<'static> = Handlebars::new();
    static ref HANDLEBARS_TEXT: Handlebars<'static> = {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    };
}

impl Template {
    /// Render this template into an email for the given recipient
    pub fn render(&self, to: &str, variables: &Value) -> Result<Mail> {
        let text = HANDLEBARS_TEXT
            .render_template(&self.text, variables)
            .map_err(|_| Error::RenderFail)?;

        let html = match &self.html {
            Some(html) => Some(
                HANDLEBARS_HTML
                    .render_template(html, variables)
                    .map_err(|_| Error::RenderFail)?,
            ),
            None => None,
        };

        Ok(Mail {
            to: to.to_string(),
            subject: self.title.clone(),
            text,
            html,
        })
    }
}

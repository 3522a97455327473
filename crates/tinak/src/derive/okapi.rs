use rocket_okapi::{
    gen::OpenApiGenerator,
    okapi::openapi3::{self, MediaType, RefOr, Responses},
    response::OpenApiResponderInner,
};

use crate::Error;

impl OpenApiResponderInner for Error {
    fn responses(gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        let mut content = rocket_okapi::okapi::Map::new();

        content.insert(
            "application/json".to_string(),
            MediaType {
                schema: Some(gen.json_schema::<Error>()),
                ..Default::default()
            },
        );

        Ok(Responses {
            default: Some(RefOr::Object(openapi3::Response {
                content,
                description: "An error occurred.".to_string(),
                ..Default::default()
            })),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use rocket_okapi::{
        gen::OpenApiGenerator, response::OpenApiResponderInner, settings::OpenApiSettings,
    };

    use crate::Error;

    #[test]
    fn error_schema_is_registered() {
        let mut gen = OpenApiGenerator::new(&OpenApiSettings::default());
        let responses = Error::responses(&mut gen).unwrap();

        assert!(responses.default.is_some());

        let spec = gen.into_openapi();
        let schemas = spec.components.expect("components").schemas;
        assert!(schemas.contains_key("Error"));
    }
}

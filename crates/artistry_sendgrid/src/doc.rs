#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::__path_contact_handler;
use crate::logic::{ContactRequest, ContactResponse};

#[derive(OpenApi)]
#[openapi(
    paths(contact_handler),
    components(schemas(ContactRequest, ContactResponse)),
    tags(
        (name = "Contact", description = "Contact form delivery")
    )
)]
pub struct SendGridApiDoc;

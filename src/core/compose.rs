use crate::domain::model::{ServiceCatalog, ValidatedSubmission};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left alone by `encodeURIComponent`, minus `'` which the URL
/// query serializer would escape anyway.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// 組出交給 WhatsApp 的訊息，欄位順序固定
pub fn compose_message(submission: &ValidatedSubmission, services: &ServiceCatalog) -> String {
    let mut text = format!("Hola! Soy {}.\n\n{}", submission.name, submission.message);

    if let Some(code) = &submission.service {
        text.push_str("\n\nServicio de interés: ");
        text.push_str(services.label_for(code));
    }

    text.push_str("\n\nMi teléfono es: ");
    text.push_str(&submission.phone);

    if let Some(email) = &submission.email {
        text.push_str("\nMi email es: ");
        text.push_str(email);
    }

    text
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// `{base}?text={payload}`
pub fn handoff_url(base: &Url, payload: &str) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&format!("text={}", encode_component(payload))));
    url
}

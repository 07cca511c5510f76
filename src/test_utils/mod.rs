//! Shared helpers for tests: HTML parsing and assertions on forms,
//! headers and JSON bodies.

mod form;
mod html;
mod http;

pub(crate) use form::{assert_form_endpoint, assert_form_input, assert_form_submit_button};
pub(crate) use html::{assert_valid_html, must_get_form, parse_html_document};
pub(crate) use http::{assert_content_type, get_header, parse_json_body};

use scraper::{ElementRef, Selector};

#[track_caller]
pub(crate) fn assert_form_endpoint(form: &ElementRef<'_>, endpoint: &str, method: &str) {
    let action = form.value().attr("action").expect("action attribute missing");
    assert_eq!(
        action, endpoint,
        "want form with action=\"{endpoint}\", got {action:?}"
    );

    let form_method = form.value().attr("method").expect("method attribute missing");
    assert_eq!(
        form_method, method,
        "want form with method=\"{method}\", got {form_method:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_type = input.value().attr("type").unwrap_or_default();
            let input_required = input.value().attr("required");

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );

            assert!(
                input_required.is_some(),
                "want input with name {name} to have the required attribute but got none"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
}

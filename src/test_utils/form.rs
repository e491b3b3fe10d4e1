use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form<'a>(html: &'a Html, id: &str) -> ElementRef<'a> {
    html.select(&Selector::parse(&format!("form#{id}")).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No form found with id {id}"))
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_attribute = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_attribute, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {hx_attribute:?}"
    );
}

/// Assert the form has a field called `name` of the element kind `tag`
/// ("input", "select") with `type_` (ignored for selects).
#[track_caller]
pub(crate) fn assert_form_input(
    form: &ElementRef<'_>,
    tag: &str,
    name: &str,
    type_: &str,
    required: bool,
) {
    let selector = Selector::parse(&format!("{tag}[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No {tag} found with name \"{name}\""));

    if tag == "input" {
        let input_type = input.value().attr("type").unwrap_or_default();
        assert_eq!(
            input_type, type_,
            "want input {name} with type \"{type_}\", got {input_type:?}"
        );
    }

    assert_eq!(
        input.value().attr("required").is_some(),
        required,
        "want {tag} with name {name} to have required={required}"
    );
}

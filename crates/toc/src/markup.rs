use docnav_traits::{Document, DomError};

/// Creates a `<tag>` carrying `classes`.
pub(crate) fn element<D: Document>(
    doc: &D,
    tag: &str,
    classes: &[&str],
) -> Result<D::Element, DomError> {
    let el = doc.create_element(tag)?;
    for class in classes {
        doc.add_class(&el, class)?;
    }
    Ok(el)
}

/// Creates a `<span>` holding `text`.
pub(crate) fn text_span<D: Document>(
    doc: &D,
    text: &str,
    classes: &[&str],
) -> Result<D::Element, DomError> {
    let span = element(doc, "span", classes)?;
    doc.append_text(&span, text)?;
    Ok(span)
}

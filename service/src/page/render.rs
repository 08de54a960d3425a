//! Server-side HTML for the header page.

use super::controller::Feedback;
use crate::headers::HeaderEntry;

/// Everything the page needs to render one response.
#[derive(Debug)]
pub struct PageView<'a> {
    pub headers: &'a [HeaderEntry],
    pub feedback: Option<Feedback>,
    pub mail_enabled: bool,
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[must_use]
pub fn render_page(view: &PageView<'_>) -> String {
    let rows: String = view
        .headers
        .iter()
        .map(|header| {
            format!(
                "      <tr><td class=\"name\">{}</td><td class=\"value\">{}</td></tr>\n",
                escape_html(&header.name),
                escape_html(&header.value)
            )
        })
        .collect();

    let feedback = view.feedback.map_or_else(String::new, |fb| {
        let class = match fb {
            Feedback::Success(_) => "feedback success",
            Feedback::Error(_) => "feedback error",
        };
        format!(
            "  <ul class=\"feedbackPanel\"><li class=\"{class}\">{}</li></ul>\n",
            escape_html(fb.message())
        )
    });

    let form = if view.mail_enabled {
        concat!(
            "  <form class=\"email\" method=\"post\" action=\"/\">\n",
            "    <input type=\"email\" name=\"email\" placeholder=\"you@example.com\" required>\n",
            "    <button type=\"submit\">Send headers</button>\n",
            "  </form>\n",
        )
    } else {
        "  <p class=\"email disabled\">Email delivery is not configured.</p>\n"
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <title>Header Analyzer</title>\n",
            "</head>\n",
            "<body>\n",
            "  <h1>Header Analyzer</h1>\n",
            "{form}",
            "{feedback}",
            "  <table class=\"table\">\n",
            "    <thead><tr><th>Name</th><th>Value</th></tr></thead>\n",
            "    <tbody>\n",
            "{rows}",
            "    </tbody>\n",
            "  </table>\n",
            "</body>\n",
            "</html>\n",
        ),
        form = form,
        feedback = feedback,
        rows = rows,
    )
}

//! Generates the HTML seating chart from a [`SeatGrid`].

use super::style::STYLESHEET;
use super::ChartMeta;
use crate::locale::{Labels, Locale};
use crate::types::{SeatContent, SeatGrid};

/// Write a complete, self-contained HTML document for `seats`.
#[must_use]
pub fn render_html(seats: &SeatGrid, meta: &ChartMeta, locale: Locale) -> String {
    let labels = locale.labels();
    let grid = seats.grid();
    let mut out = String::with_capacity(2048 + grid.capacity() * 64);

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", locale.code()));
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{}</title>\n", html_escape(labels.title)));
    out.push_str("    <style>\n");
    out.push_str(STYLESHEET);
    out.push_str("    </style>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n\n");

    out.push_str("<h1>");
    out.push_str(&html_escape(&heading(meta, labels)));
    out.push_str("</h1>\n\n");

    out.push_str("<table>\n");
    write_head(&mut out, grid.cols(), labels);
    write_body(&mut out, seats, labels);
    out.push_str("</table>\n\n");

    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

/// `{title} - {subject} | {room} | {date} {time} ({caption}{seed})`
fn heading(meta: &ChartMeta, labels: &Labels) -> String {
    format!(
        "{} - {} | {} | {} {} ({}{})",
        labels.title,
        meta.subject,
        meta.room,
        meta.date,
        meta.time,
        labels.seed_caption,
        meta.seed_text()
    )
}

/// `<thead>`: an empty corner cell, then one header per seat column.
fn write_head(out: &mut String, cols: usize, labels: &Labels) {
    out.push_str("    <thead>\n");
    out.push_str("        <tr>\n");
    out.push_str("            <th></th>\n");
    for col in 0..cols {
        out.push_str(&format!(
            "            <th>{}</th>\n",
            html_escape(&labels.seat(col + 1))
        ));
    }
    out.push_str("        </tr>\n");
    out.push_str("    </thead>\n");
}

/// `<tbody>`: a row label followed by one cell per seat.
fn write_body(out: &mut String, seats: &SeatGrid, labels: &Labels) {
    out.push_str("    <tbody>\n");
    for (row, seat_row) in seats.rows().enumerate() {
        out.push_str("        <tr>\n");
        out.push_str(&format!(
            "            <th>{}</th>\n",
            html_escape(&labels.row(row + 1))
        ));
        for seat in seat_row {
            write_seat(out, seat, labels);
        }
        out.push_str("        </tr>\n");
    }
    out.push_str("    </tbody>\n");
}

/// Write a single `<td>`: name and ID on two lines, or the empty marker.
fn write_seat(out: &mut String, seat: &SeatContent, labels: &Labels) {
    match seat {
        SeatContent::Occupied(o) => {
            out.push_str(&format!(
                "            <td>{}<br>{}</td>\n",
                html_escape(&o.name),
                html_escape(&o.id)
            ));
        }
        SeatContent::Empty => {
            out.push_str(&format!(
                "            <td class=\"empty-seat\">{}</td>\n",
                html_escape(labels.empty_seat)
            ));
        }
    }
}

/// Minimal HTML escaping for text content.
pub(crate) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// File uploader and dataset summary cards
use crate::domain::dataset::DatasetSummary;
use html_escape::encode_text;

/// Extension-or-MIME check applied before a file is accepted for upload.
/// The content itself is never inspected.
pub fn is_csv_file(file_name: &str, content_type: Option<&str>) -> bool {
    content_type == Some("text/csv") || file_name.ends_with(".csv")
}

/// Byte count as kilobytes with one decimal, e.g. `2.0 KB`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Pages are rendered after `handle_upload` returns, so a served page always
/// has `is_loading == false`; while a form is in flight the page script
/// disables the button and shows the same "Uploading..." label.
pub fn uploader_card(is_loading: bool) -> String {
    let disabled = if is_loading { " disabled" } else { "" };
    let label = if is_loading { "Uploading..." } else { "Upload" };
    format!(
        r#"<section class="card">
<h2><span class="icon">&#x2B06;</span>Upload CSV Dataset</h2>
<p class="description">Upload a CSV file to analyze your data and generate insights</p>
<form id="upload-form" method="post" action="/dashboard" enctype="multipart/form-data">
<div class="dropzone">
<input type="file" name="file" accept=".csv,text/csv">
<p class="title">Drop your CSV file here or click to browse</p>
<p class="hint">Only CSV files are supported</p>
</div>
<div class="selected">
<div><span class="name"></span> <span class="badge badge-secondary size"></span></div>
<div><button type="submit"{disabled}>{label}</button> <button type="button" class="ghost" aria-label="Remove file">&#x2715;</button></div>
</div>
</form>
</section>"#,
        disabled = disabled,
        label = label,
    )
}

pub fn summary_card(summary: &DatasetSummary) -> String {
    let badges: String = summary
        .column_names
        .iter()
        .map(|name| format!(r#"<span class="badge badge-outline">{}</span>"#, encode_text(name)))
        .collect();

    let file_line = match (&summary.file_name, summary.file_size) {
        (Some(name), Some(size)) => format!(
            r#"<p class="description">{} &middot; {}</p>"#,
            encode_text(name),
            format_kb(size)
        ),
        _ => r#"<p class="description">Overview of your uploaded dataset</p>"#.to_string(),
    };

    format!(
        r#"<section class="card">
<h2>Dataset Summary</h2>
{file_line}
<div class="stats">
<div class="stat"><div class="value">{rows}</div><div class="label">Rows</div></div>
<div class="stat"><div class="value">{columns}</div><div class="label">Columns</div></div>
<div class="stat"><div class="value">{short_id}</div><div class="label">Dataset ID</div></div>
</div>
<div class="columns"><h4>Column Names:</h4><div class="badges">{badges}</div></div>
</section>"#,
        file_line = file_line,
        rows = group_thousands(summary.rows),
        columns = summary.columns,
        short_id = encode_text(summary.short_id()),
        badges = badges,
    )
}

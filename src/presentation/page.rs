//! Page shell for the dashboard: layout, stylesheet and the small browser
//! script that draws charts and guards the upload form.

use crate::application::dashboard_service::{DashboardState, DataSource};
use crate::presentation::chart_options::charts_section;
use crate::presentation::insight_view::insights_section;
use crate::presentation::uploader_view::{summary_card, uploader_card};
use html_escape::encode_text;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

pub const STYLES: &str = r#"
:root {
  --bg: #f8fafc;
  --card: #ffffff;
  --border: #e2e8f0;
  --text: #0f172a;
  --muted: #64748b;
  --muted-bg: #f1f5f9;
  --primary: #2563eb;
  --destructive: #dc2626;
  --warning-bg: #fffbeb;
  --warning-border: #f59e0b;
  --radius: 10px;
  --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: var(--bg); color: var(--text); font-family: var(--font); line-height: 1.5; }
.container { max-width: 1200px; margin: 0 auto; padding: 32px 16px; }
header { margin-bottom: 32px; }
header h1 { font-size: 36px; font-weight: 700; margin-bottom: 8px; }
header p { font-size: 20px; color: var(--muted); }
.stack > * + * { margin-top: 32px; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: var(--radius); padding: 24px; }
.card:hover.insight { box-shadow: 0 4px 14px rgba(15, 23, 42, 0.08); }
.card h2 { font-size: 20px; font-weight: 600; display: flex; align-items: center; gap: 8px; }
.card .description { color: var(--muted); margin-bottom: 16px; }
.dropzone { position: relative; border: 2px dashed #cbd5e1; border-radius: var(--radius); padding: 32px; text-align: center; transition: all 140ms ease-out; }
.dropzone.active, .dropzone:hover { border-color: var(--primary); background: rgba(37, 99, 235, 0.05); }
.dropzone input[type=file] { position: absolute; inset: 0; width: 100%; height: 100%; opacity: 0; cursor: pointer; }
.dropzone .title { font-size: 18px; font-weight: 500; margin-bottom: 8px; }
.dropzone .hint { font-size: 14px; color: var(--muted); }
.selected { display: none; margin-top: 16px; align-items: center; justify-content: space-between; padding: 12px; background: var(--muted-bg); border-radius: var(--radius); }
.selected.visible { display: flex; }
button { border: none; border-radius: 6px; padding: 6px 14px; font-size: 14px; cursor: pointer; background: var(--primary); color: #fff; }
button[disabled] { opacity: 0.6; cursor: progress; }
button.ghost { background: transparent; color: var(--text); }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.stat { text-align: center; padding: 16px; background: var(--muted-bg); border-radius: var(--radius); }
.stat .value { font-size: 24px; font-weight: 700; color: var(--primary); }
.stat .label { font-size: 14px; color: var(--muted); }
.columns { margin-top: 16px; }
.columns h4 { font-weight: 500; margin-bottom: 8px; }
.badges { display: flex; flex-wrap: wrap; gap: 8px; }
.badge { display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; border: 1px solid transparent; }
.badge-default { background: var(--primary); color: #fff; }
.badge-destructive { background: var(--destructive); color: #fff; }
.badge-secondary { background: var(--muted-bg); color: var(--text); }
.badge-outline { border-color: var(--border); color: var(--text); }
.chart-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 24px; }
.chart { height: 320px; width: 100%; }
.insight-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.insight-head { display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 12px; }
.insight-head h3 { font-size: 18px; display: flex; align-items: center; gap: 8px; }
.icon { font-size: 18px; }
.icon-blue { color: #3b82f6; }
.icon-orange { color: #f97316; }
.icon-green { color: #22c55e; }
.icon-purple { color: #a855f7; }
.icon-gray { color: #6b7280; }
.notice { padding: 12px 16px; border-radius: var(--radius); border: 1px solid; }
.notice-error { border-color: var(--destructive); color: var(--destructive); background: #fef2f2; }
.notice-sample { border-color: var(--warning-border); background: var(--warning-bg); }
@media (max-width: 960px) {
  .chart-grid, .insight-grid, .stats { grid-template-columns: 1fr; }
}
"#;

/// Draws every `.chart` from its embedded option and keeps the upload form
/// to CSV files only.
pub const SCRIPT: &str = r#"
document.querySelectorAll('.chart').forEach(function (el) {
  var source = document.getElementById(el.dataset.option);
  if (!source || !window.echarts) { return; }
  var chart = echarts.init(el, null, { renderer: 'canvas' });
  chart.setOption(JSON.parse(source.textContent));
  window.addEventListener('resize', function () { chart.resize(); });
});

(function () {
  var form = document.getElementById('upload-form');
  if (!form) { return; }
  var zone = form.querySelector('.dropzone');
  var input = form.querySelector('input[type=file]');
  var title = form.querySelector('.dropzone .title');
  var selected = form.querySelector('.selected');
  var name = form.querySelector('.selected .name');
  var size = form.querySelector('.selected .size');
  var button = form.querySelector('button[type=submit]');
  var remove = form.querySelector('button.ghost');
  var placeholder = title.textContent;

  function isCsv(file) {
    return file.type === 'text/csv' || file.name.endsWith('.csv');
  }

  function show(file) {
    if (!file || !isCsv(file)) {
      input.value = '';
      return;
    }
    title.textContent = file.name;
    name.textContent = file.name;
    size.textContent = (file.size / 1024).toFixed(1) + ' KB';
    selected.classList.add('visible');
  }

  ['dragenter', 'dragover'].forEach(function (type) {
    zone.addEventListener(type, function () { zone.classList.add('active'); });
  });
  ['dragleave', 'drop'].forEach(function (type) {
    zone.addEventListener(type, function () { zone.classList.remove('active'); });
  });
  input.addEventListener('change', function () { show(input.files[0]); });
  remove.addEventListener('click', function () {
    input.value = '';
    title.textContent = placeholder;
    selected.classList.remove('visible');
  });
  form.addEventListener('submit', function (event) {
    if (!input.files[0]) {
      event.preventDefault();
      return;
    }
    button.disabled = true;
    button.textContent = 'Uploading...';
  });
})();
"#;

fn sample_notice(state: &DashboardState) -> String {
    match &state.source {
        Some(DataSource::Sample { reason }) => format!(
            r#"<div class="notice notice-sample"><strong>Showing sample data.</strong> The analysis for this dataset is unavailable ({}).</div>"#,
            encode_text(reason)
        ),
        _ => String::new(),
    }
}

/// Render the whole dashboard for `state`. `error` is shown above the
/// uploader when the last upload was rejected.
pub fn render_page(state: &DashboardState, error: Option<&str>) -> String {
    let error_notice = error
        .map(|message| {
            format!(
                r#"<div class="notice notice-error">{}</div>"#,
                encode_text(message)
            )
        })
        .unwrap_or_default();
    let summary = state.summary.as_ref().map(summary_card).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Data Analyst</title>
<style>{styles}</style>
<script src="{echarts}"></script>
</head>
<body>
<div class="container">
<header>
<h1>AI Data Analyst</h1>
<p>Upload your CSV data and get instant insights with AI-powered analysis</p>
</header>
<main class="stack">
{error_notice}
{uploader}
{summary}
{sample_notice}
{charts}
{insights}
</main>
</div>
<script>{script}</script>
</body>
</html>
"#,
        styles = STYLES,
        echarts = ECHARTS_CDN,
        error_notice = error_notice,
        uploader = uploader_card(state.is_loading),
        summary = summary,
        sample_notice = sample_notice(state),
        charts = charts_section(&state.charts),
        insights = insights_section(&state.insights),
        script = SCRIPT,
    )
}

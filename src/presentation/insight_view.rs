// Insight cards
use crate::domain::insight::{Insight, InsightKind};
use html_escape::encode_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightIcon {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Destructive => "badge badge-destructive",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

pub fn insight_icon(kind: &InsightKind) -> InsightIcon {
    match kind {
        InsightKind::Trend => InsightIcon { name: "trending-up", glyph: "&#x2197;", color: "icon-blue" },
        InsightKind::Anomaly => InsightIcon { name: "alert-triangle", glyph: "&#x26A0;", color: "icon-orange" },
        InsightKind::Correlation => InsightIcon { name: "link", glyph: "&#x1F517;", color: "icon-green" },
        InsightKind::Summary => InsightIcon { name: "bar-chart", glyph: "&#x1F4CA;", color: "icon-purple" },
        InsightKind::Other(_) => InsightIcon { name: "bar-chart", glyph: "&#x1F4CA;", color: "icon-gray" },
    }
}

pub fn badge_variant(kind: &InsightKind) -> BadgeVariant {
    match kind {
        InsightKind::Trend => BadgeVariant::Default,
        InsightKind::Anomaly => BadgeVariant::Destructive,
        InsightKind::Correlation => BadgeVariant::Secondary,
        InsightKind::Summary | InsightKind::Other(_) => BadgeVariant::Outline,
    }
}

pub fn insight_card(insight: &Insight) -> String {
    let icon = insight_icon(&insight.kind);
    format!(
        r#"<article class="card insight"><div class="insight-head"><h3><span class="icon {color}" data-icon="{name}">{glyph}</span>{title}</h3><span class="{badge}">{kind}</span></div><p class="description">{description}</p></article>"#,
        color = icon.color,
        name = icon.name,
        glyph = icon.glyph,
        title = encode_text(&insight.title),
        badge = badge_variant(&insight.kind).css_class(),
        kind = encode_text(insight.kind.as_str()),
        description = encode_text(&insight.description),
    )
}

/// The "AI Insights" card; nothing at all for an empty list.
pub fn insights_section(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return String::new();
    }

    let cards: String = insights.iter().map(insight_card).collect();
    format!(
        r#"<section class="card"><h2>AI Insights</h2><p class="description">Automated analysis and insights generated from your data</p><div class="insight-grid">{}</div></section>"#,
        cards
    )
}

use ratatui::{prelude::*, widgets::*};

use crate::App;
use crate::state::{MIN_QUERY_CHARS, SearchPhase};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the search input bar with the live query
pub fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let hint = if state.search.input.is_empty() {
        format!("type more than {MIN_QUERY_CHARS} characters to search")
    } else {
        state.search.input.clone()
    };
    let hint_style = if state.search.input.is_empty() {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.text_primary)
    };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(theme.text_secondary)),
        Span::styled(hint, hint_style),
        Span::styled("█", Style::default().fg(theme.accent_secondary)),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" catalog-tui ")
            .title_style(theme.panel_title())
            .border_style(theme.panel_border()),
    );

    f.render_widget(bar, area);
}

/// Render the search results panel: a spinner while the delayed search is
/// pending, the ranked match list once it reports, or the empty-state text
/// when nothing matched.
pub fn render_results_panel(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .title_style(theme.panel_title())
        .border_style(theme.panel_border());

    match state.search.phase {
        SearchPhase::Pending => {
            let frame = SPINNER_FRAMES[state.ui.spinner_frame % SPINNER_FRAMES.len()];
            let loading = Paragraph::new(Line::from(vec![
                Span::styled(frame, Style::default().fg(theme.status_warning)),
                Span::styled(" Searching...", Style::default().fg(theme.text_secondary)),
            ]))
            .block(block);
            f.render_widget(loading, area);
        }
        SearchPhase::Displaying if state.search.results.is_empty() => {
            let empty = Paragraph::new(Line::styled(
                "No matching items",
                Style::default().fg(theme.text_muted),
            ))
            .block(block);
            f.render_widget(empty, area);
        }
        SearchPhase::Displaying => {
            let items: Vec<ListItem> = state
                .search
                .results
                .iter()
                .map(|(item, distance)| {
                    let name = item.name.clone().unwrap_or_else(|| "(unnamed)".to_string());
                    let mut spans = vec![
                        Span::styled(name, Style::default().fg(theme.text_primary)),
                        Span::raw("  "),
                        Span::styled(item.price.clone(), Style::default().fg(theme.text_secondary)),
                    ];
                    if let Some(ref discount) = item.discount {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(
                            discount.clone(),
                            Style::default().fg(theme.accent_secondary),
                        ));
                    }
                    // Exact matches get a marker instead of a raw number
                    let rank = if *distance == 0 {
                        " (exact)".to_string()
                    } else {
                        format!(" (~{distance})")
                    };
                    spans.push(Span::styled(rank, Style::default().fg(theme.text_muted)));
                    ListItem::new(Line::from(spans))
                })
                .collect();

            let list = List::new(items).block(block.title(format!(
                " Results ({} matches) ",
                state.search.results.len()
            )));
            f.render_widget(list, area);
        }
        SearchPhase::Idle => {}
    }
}

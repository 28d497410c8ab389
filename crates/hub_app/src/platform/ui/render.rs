use hub_core::{
    copyright_line, AppViewModel, CardView, ContentPageView, LinkSection, Palette, Rgb,
    SidebarView,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::input::{HitMap, HitTarget};
use super::layout::{self, ScreenLayout};
use super::{Focus, UiState};

const CURSOR: &str = "█";
const LINK_GAP: u16 = 2;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

struct Styles {
    base: Style,
    muted: Style,
    surface: Style,
    surface_muted: Style,
    accent: Style,
    button: Style,
    button_active: Style,
    rating: Style,
}

impl Styles {
    fn new(palette: &Palette) -> Self {
        let background = color(palette.background);
        let surface = color(palette.surface);
        Self {
            base: Style::default().fg(color(palette.text)).bg(background),
            muted: Style::default().fg(color(palette.muted_text)).bg(background),
            surface: Style::default().fg(color(palette.text)).bg(surface),
            surface_muted: Style::default().fg(color(palette.muted_text)).bg(surface),
            accent: Style::default().fg(color(palette.accent)).bg(background),
            button: Style::default()
                .fg(color(palette.text))
                .bg(color(palette.page_button)),
            button_active: Style::default()
                .fg(color(palette.accent_text))
                .bg(color(palette.accent)),
            rating: Style::default().fg(color(palette.rating)).bg(surface),
        }
    }
}

/// Draws one frame and returns the clickable regions it produced.
pub fn render(frame: &mut Frame, view: &AppViewModel, ui: &UiState, year: i32) -> HitMap {
    let area = frame.area();
    let styles = Styles::new(&view.palette);
    let screen = layout::compute(area, view);
    let mut hits = HitMap::default();

    frame.render_widget(Block::default().style(styles.base), area);
    render_header(frame, view, ui, &screen, &styles, &mut hits);
    if let Some(rect) = screen.sidebar {
        render_sidebar(frame, &view.sidebar, rect, &styles, &mut hits);
    }
    if let Some(content) = &view.content {
        render_content(frame, content, ui.scroll_rows, screen.content, &styles, &mut hits);
    }
    if screen.sidebar.is_some() {
        hits.push(screen.content, HitTarget::SidebarOverlay);
    }
    render_footer(frame, &view.footer, year, screen.footer, &styles, &mut hits);
    frame.render_widget(Paragraph::new(HELP_TEXT).style(styles.muted), screen.help);

    // Popup goes last so it covers the content underneath.
    if let Some(rect) = screen.suggestions {
        hits.add_search_container(rect);
        render_suggestions(
            frame,
            &view.search.suggestions,
            ui.suggestion_cursor,
            rect,
            &styles,
            &mut hits,
        );
    }
    hits
}

fn render_header(
    frame: &mut Frame,
    view: &AppViewModel,
    ui: &UiState,
    screen: &ScreenLayout,
    styles: &Styles,
    hits: &mut HitMap,
) {
    let bordered = || Block::bordered().border_style(styles.muted);

    let logo = Span::styled(
        view.header.site_name,
        styles.accent.add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(logo).block(bordered()), screen.logo);

    let nav_block = bordered();
    let nav = nav_block.inner(screen.nav);
    frame.render_widget(nav_block, screen.nav);
    let mut x = nav.x;
    for link in &view.header.links {
        let label = Span::styled(
            link.label.as_str(),
            if link.active {
                styles
                    .accent
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                styles.base
            },
        );
        let width = label.width() as u16;
        let rect = Rect::new(x, nav.y, width, nav.height.min(1)).intersection(nav);
        frame.render_widget(Paragraph::new(label), rect);
        hits.push(rect, HitTarget::Link(link.target.clone()));
        x = x.saturating_add(width + LINK_GAP);
    }

    let search = &view.search;
    let search_block = bordered().border_style(if search.active {
        styles.accent
    } else {
        styles.muted
    });
    let input = search_block.inner(screen.search_input);
    frame.render_widget(search_block, screen.search_input);
    let focused = ui.focus == Focus::Search;
    let mut spans = Vec::new();
    if search.query.is_empty() {
        if focused {
            spans.push(Span::styled(CURSOR, styles.base));
        }
        spans.push(Span::styled(search.placeholder, styles.muted));
    } else {
        spans.push(Span::styled(search.query.as_str(), styles.base));
        if focused {
            spans.push(Span::styled(CURSOR, styles.base));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), input);
    hits.push(screen.search_input, HitTarget::SearchInput);
    hits.add_search_container(screen.search_input);

    let button = |label: &'static str| {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(bordered())
            .style(styles.base)
    };
    frame.render_widget(button("🔍"), screen.search_button);
    hits.push(screen.search_button, HitTarget::SearchButton);
    hits.add_search_container(screen.search_button);

    frame.render_widget(button(view.header.theme_toggle_label), screen.theme_button);
    hits.push(screen.theme_button, HitTarget::ThemeButton);

    frame.render_widget(button("☰"), screen.menu_button);
    hits.push(screen.menu_button, HitTarget::MenuButton);
}

fn render_sidebar(
    frame: &mut Frame,
    sidebar: &SidebarView,
    area: Rect,
    styles: &Styles,
    hits: &mut HitMap,
) {
    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .border_style(styles.surface_muted)
        .style(styles.surface);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut rows: Vec<(Line, Option<HitTarget>)> = vec![(
        Line::styled("[×] Close", styles.surface),
        Some(HitTarget::SidebarClose),
    )];
    let mut index = 0;
    for section in &sidebar.sections {
        rows.push((Line::default(), None));
        rows.push((
            Line::styled(
                section.title.as_str(),
                styles.surface.add_modifier(Modifier::BOLD),
            ),
            None,
        ));
        for link in &section.links {
            index += 1;
            rows.push((
                Line::styled(format!("{index}. {}", link.label), styles.surface),
                Some(HitTarget::SidebarLink(index - 1)),
            ));
        }
    }

    let visible = rows.into_iter().take(usize::from(inner.height));
    for (offset, (line, target)) in visible.enumerate() {
        let rect = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(line), rect);
        if let Some(target) = target {
            hits.push(rect, target);
        }
    }
}

fn render_content(
    frame: &mut Frame,
    content: &ContentPageView,
    scroll_rows: u16,
    area: Rect,
    styles: &Styles,
    hits: &mut HitMap,
) {
    let (title_area, grid, pages_area) =
        layout::content_sections(area, !content.pages.is_empty());

    let mut title = vec![Span::styled(
        content.title.as_str(),
        styles.base.add_modifier(Modifier::BOLD),
    )];
    if content.total_pages > 0 {
        title.push(Span::styled(
            format!("  page {} of {}", content.current_page, content.total_pages),
            styles.muted,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    if content.cards.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing to show here.").style(styles.muted),
            grid,
        );
    }

    let rows: Vec<&[CardView]> = content.cards.chunks(CARD_COLUMNS).collect();
    let visible = usize::from((grid.height / CARD_HEIGHT).max(1));
    let skip = usize::from(scroll_rows).min(rows.len().saturating_sub(visible));
    for (slot, row) in rows.iter().skip(skip).take(visible).enumerate() {
        let top = grid.y.saturating_add(slot as u16 * CARD_HEIGHT);
        let row_area = Rect::new(grid.x, top, grid.width, CARD_HEIGHT).intersection(grid);
        for (card, rect) in row.iter().zip(layout::card_columns(row_area)) {
            render_card(frame, card, rect, styles);
        }
    }

    if let Some(pages_area) = pages_area {
        let width = (content.pages.len() as u16).saturating_mul(PAGE_BUTTON_WIDTH);
        let start = pages_area.x + pages_area.width.saturating_sub(width) / 2;
        for (slot, button) in content.pages.iter().enumerate() {
            let x = start.saturating_add(slot as u16 * PAGE_BUTTON_WIDTH);
            let rect = Rect::new(x, pages_area.y, PAGE_BUTTON_WIDTH, pages_area.height)
                .intersection(pages_area);
            let style = if button.active {
                styles.button_active
            } else {
                styles.button
            };
            let widget = Paragraph::new(button.page.to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(styles.muted));
            frame.render_widget(widget, rect);
            hits.push(rect, HitTarget::PageButton(button.page));
        }
    }
}

fn render_card(frame: &mut Frame, card: &CardView, area: Rect, styles: &Styles) {
    let block = Block::bordered()
        .title(Span::styled(
            card.title.as_str(),
            styles.surface.add_modifier(Modifier::BOLD),
        ))
        .border_style(styles.surface_muted)
        .style(styles.surface);
    let lines = vec![
        Line::from(vec![
            Span::styled("★ ", styles.rating),
            Span::styled(card.rating.as_str(), styles.rating),
        ]),
        Line::styled(card.description.as_str(), styles.surface),
        Line::styled(card.image_url.as_str(), styles.surface_muted),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_footer(
    frame: &mut Frame,
    sections: &[LinkSection],
    year: i32,
    area: Rect,
    styles: &Styles,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styles.muted);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || sections.is_empty() {
        return;
    }

    let link_rows = inner.height - 1;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            sections
                .iter()
                .map(|_| Constraint::Ratio(1, sections.len() as u32)),
        )
        .split(Rect::new(inner.x, inner.y, inner.width, link_rows));

    for (section, column) in sections.iter().zip(columns.iter()) {
        let mut lines = vec![Line::styled(
            section.title.as_str(),
            styles.base.add_modifier(Modifier::BOLD),
        )];
        lines.extend(
            section
                .links
                .iter()
                .map(|link| Line::styled(link.label.as_str(), styles.muted)),
        );
        frame.render_widget(Paragraph::new(lines), *column);

        for (offset, link) in section.links.iter().enumerate() {
            // Fragment-only links leave the location unchanged.
            if link.target.starts_with('#') {
                continue;
            }
            let width = Span::raw(link.label.as_str()).width() as u16;
            let rect = Rect::new(column.x, column.y + 1 + offset as u16, width, 1)
                .intersection(*column);
            hits.push(rect, HitTarget::Link(link.target.clone()));
        }
    }

    let copyright = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(copyright_line(year))
            .alignment(Alignment::Center)
            .style(styles.muted),
        copyright,
    );
}

fn render_suggestions(
    frame: &mut Frame,
    suggestions: &[String],
    cursor: Option<usize>,
    area: Rect,
    styles: &Styles,
    hits: &mut HitMap,
) {
    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .border_style(styles.accent)
        .style(styles.surface);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (index, suggestion) in suggestions
        .iter()
        .enumerate()
        .take(usize::from(inner.height))
    {
        let rect = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
        let style = if cursor == Some(index) {
            styles.button_active
        } else {
            styles.surface
        };
        frame.render_widget(Paragraph::new(suggestion.as_str()).style(style), rect);
        hits.push(rect, HitTarget::Suggestion(index));
    }
}

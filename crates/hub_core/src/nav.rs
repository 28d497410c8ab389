//! Fixed link tables for the header, sidebar and footer.

use crate::Category;

pub const SITE_NAME: &str = "EntertainmentHub";

/// Counts offered for every category in the sidebar, largest first.
pub const SIDEBAR_TOP_COUNTS: [usize; 3] = [100, 50, 20];
/// Count linked from the footer.
pub const FOOTER_TOP_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSection {
    pub title: String,
    pub links: Vec<NavLink>,
}

pub fn header_links() -> Vec<NavLink> {
    Category::ALL
        .into_iter()
        .map(|category| NavLink::new(category.display_name(), format!("/{}", category.token())))
        .collect()
}

pub fn sidebar_sections() -> Vec<LinkSection> {
    Category::ALL
        .into_iter()
        .map(|category| LinkSection {
            title: category.display_name().to_string(),
            links: SIDEBAR_TOP_COUNTS
                .into_iter()
                .map(|count| top_link(category, count))
                .collect(),
        })
        .collect()
}

/// Sidebar links in display order, as addressed by `Msg::SidebarLinkChosen`.
pub fn sidebar_links() -> Vec<NavLink> {
    sidebar_sections()
        .into_iter()
        .flat_map(|section| section.links)
        .collect()
}

pub fn footer_sections() -> Vec<LinkSection> {
    let mut sections: Vec<LinkSection> = Category::ALL
        .into_iter()
        .map(|category| LinkSection {
            title: format!("Top {}", category.display_name()),
            links: vec![top_link(category, FOOTER_TOP_COUNT)],
        })
        .collect();

    sections.push(LinkSection {
        title: "Help".to_string(),
        links: vec![
            NavLink::new("Contact Us", "/contact"),
            NavLink::new("FAQ", "/faq"),
            NavLink::new("Privacy Policy", "/privacy"),
        ],
    });
    sections.push(LinkSection {
        title: "About Us".to_string(),
        links: vec![
            NavLink::new("Our Story", "/about"),
            NavLink::new("Team", "/team"),
        ],
    });
    sections.push(LinkSection {
        title: "Connect".to_string(),
        links: vec![
            NavLink::new("Twitter", "#"),
            NavLink::new("Facebook", "#"),
            NavLink::new("Instagram", "#"),
        ],
    });
    sections
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {SITE_NAME}. All rights reserved.")
}

fn top_link(category: Category, count: usize) -> NavLink {
    NavLink::new(
        format!("Top {count} {}", category.display_name()),
        format!("/top/{}/{count}", category.token()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_has_three_counts_per_category() {
        let links = sidebar_links();
        assert_eq!(links.len(), 9);
        assert_eq!(links[0], NavLink::new("Top 100 Games", "/top/games/100"));
        assert_eq!(links[5], NavLink::new("Top 20 Movies", "/top/movies/20"));
        assert_eq!(links[8].target, "/top/webseries/20");
    }

    #[test]
    fn header_links_cover_every_category() {
        let targets: Vec<String> = header_links().into_iter().map(|link| link.target).collect();
        assert_eq!(targets, vec!["/games", "/movies", "/webseries"]);
    }

    #[test]
    fn footer_layout() {
        let sections = footer_sections();
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Top Games", "Top Movies", "Top Web Series", "Help", "About Us", "Connect"]
        );
        assert_eq!(sections[2].links[0].label, "Top 100 Web Series");
        assert_eq!(copyright_line(2024), "© 2024 EntertainmentHub. All rights reserved.");
    }
}

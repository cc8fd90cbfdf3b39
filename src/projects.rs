use std::fmt;

use crate::data::{Project, ProjectCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::WebApp),
        ProjectFilter::Only(ProjectCategory::Blockchain),
        ProjectFilter::Only(ProjectCategory::Tool),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.category == c,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectGroups<'a> {
    pub featured: Vec<&'a Project>,
    pub other: Vec<&'a Project>,
}

/// Filter `projects` and split them into featured and other groups,
/// keeping source order inside each group.
pub fn group_projects(projects: &[Project], filter: ProjectFilter) -> ProjectGroups<'_> {
    let (featured, other): (Vec<_>, Vec<_>) = projects
        .iter()
        .filter(|p| filter.matches(p))
        .partition(|p| p.featured);
    ProjectGroups { featured, other }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PROJECTS;

    fn titles(v: &[&Project]) -> Vec<&'static str> {
        v.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_all_yields_everything() {
        let groups = group_projects(PROJECTS, ProjectFilter::All);
        assert_eq!(groups.featured.len() + groups.other.len(), 6);
        assert_eq!(
            titles(&groups.featured),
            vec![
                "AI-Powered Analytics Dashboard",
                "Blockchain DeFi Platform",
                "Social Media Automation Tool",
            ]
        );
        assert_eq!(
            titles(&groups.other),
            vec![
                "E-Commerce Marketplace",
                "Developer Portfolio Builder",
                "Real-time Chat Application",
            ]
        );
    }

    #[test]
    fn test_blockchain_filter() {
        let groups = group_projects(PROJECTS, ProjectFilter::Only(ProjectCategory::Blockchain));
        assert_eq!(titles(&groups.featured), vec!["Blockchain DeFi Platform"]);
        assert!(groups.other.is_empty());
    }

    #[test]
    fn test_every_filter_is_an_ordered_subset() {
        for filter in ProjectFilter::ALL {
            let groups = group_projects(PROJECTS, filter);
            for p in groups.featured.iter().chain(groups.other.iter()) {
                assert!(filter.matches(p), "{} leaked into {filter}", p.title);
            }
            let expected = PROJECTS
                .iter()
                .filter(|p| filter.matches(p))
                .count();
            assert_eq!(groups.featured.len() + groups.other.len(), expected);
            for group in [&groups.featured, &groups.other] {
                let positions = group
                    .iter()
                    .map(|p| {
                        PROJECTS
                            .iter()
                            .position(|q| q.title == p.title)
                            .expect("project should come from the source list")
                    })
                    .collect::<Vec<_>>();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_tool_filter_has_no_featured() {
        let groups = group_projects(PROJECTS, ProjectFilter::Only(ProjectCategory::Tool));
        assert!(groups.featured.is_empty());
        assert_eq!(titles(&groups.other), vec!["Developer Portfolio Builder"]);
    }

    #[test]
    fn test_filter_labels() {
        let labels = ProjectFilter::ALL.map(|f| f.to_string());
        assert_eq!(labels, ["All", "Web App", "Blockchain", "Tool"]);
    }

    #[test]
    fn test_empty_source() {
        let groups = group_projects(&[], ProjectFilter::All);
        assert!(groups.featured.is_empty());
        assert!(groups.other.is_empty());
    }
}

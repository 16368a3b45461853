pub mod annotation;
pub mod group;
pub mod record;

pub use annotation::Annotation;
pub use group::{Associations, GroupState, Project, ServerGroup};
pub use record::{RecordStatus, ServerRecord, SortKey};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_state_derivation() {
        let mut group = ServerGroup::new("Prod");
        group.enabled_count = 2;
        assert!(group.is_active());
        assert_eq!(group.state(), GroupState::Active);

        group.disabled_count = 1;
        assert!(!group.is_active());
        assert_eq!(group.state(), GroupState::Mixed);

        group.enabled_count = 0;
        assert_eq!(group.state(), GroupState::Disabled);
        assert_eq!(group.line_count(), 1);
    }

    #[test]
    fn active_line_count_sums_all_groups() {
        let mut acme = Project::new("Acme");
        let mut prod = ServerGroup::new("Prod");
        prod.enabled_count = 1;
        prod.disabled_count = 1;
        let mut staging = ServerGroup::new("Staging");
        staging.enabled_count = 1;
        acme.groups.insert(prod.name.clone(), prod);
        acme.groups.insert(staging.name.clone(), staging);

        let mut associations = Associations::default();
        associations.projects.insert(acme.name.clone(), acme);

        assert_eq!(associations.active_line_count(), 2);
        assert_eq!(associations.group_count(), 2);
        assert!(associations.contains_group("Acme", "Staging"));
        assert!(!associations.contains_group("Acme", "Dev"));
        assert!(!associations.contains_group("Other", "Staging"));
    }

    #[test]
    fn active_group_names_are_sorted() {
        let mut project = Project::new("Acme");
        for name in ["Staging", "Dev", "Prod"] {
            let mut group = ServerGroup::new(name);
            group.enabled_count = 1;
            project.groups.insert(name.to_string(), group);
        }
        assert_eq!(project.active_group_names(), vec!["Dev", "Prod", "Staging"]);
    }

    #[test]
    fn associations_serialize() {
        let mut associations = Associations::default();
        let mut project = Project::new("Acme");
        project
            .groups
            .insert("Prod".to_string(), ServerGroup::new("Prod"));
        associations
            .projects
            .insert("Acme".to_string(), project);

        let json = serde_json::to_string(&associations).expect("serialize associations");
        let round: Associations = serde_json::from_str(&json).expect("deserialize associations");
        assert_eq!(round, associations);
    }
}

use skilltrack_core::goals::{GoalService, GoalServiceTrait, NewGoal};
use skilltrack_core::models::{ProficiencyLevel, SkillCategory};
use skilltrack_core::skills::{NewSkill, SkillError, SkillService, SkillUpdate, MAX_SKILL_NAME_LEN};

mod common;

#[test]
fn test_create_and_get_skill() {
    let db = common::setup_db();
    let service = SkillService::new(db.pool.clone());

    let skill = service
        .create_skill(NewSkill {
            name: "React".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap();

    let fetched = service.get_skill(&skill.id).unwrap();
    assert_eq!(fetched.name, "React");
    assert_eq!(fetched.category, SkillCategory::Technical);

    let err = service.get_skill("missing").unwrap_err();
    assert!(matches!(err, SkillError::NotFound(_)));
}

#[test]
fn test_duplicate_name_rejected() {
    let db = common::setup_db();
    let service = SkillService::new(db.pool.clone());

    service
        .create_skill(NewSkill {
            name: "Python".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap();

    let err = service
        .create_skill(NewSkill {
            name: "Python".to_string(),
            category: SkillCategory::SoftSkills,
        })
        .unwrap_err();
    assert!(matches!(err, SkillError::DuplicateName));
}

#[test]
fn test_update_name_uniqueness_excludes_self() {
    let db = common::setup_db();
    let service = SkillService::new(db.pool.clone());

    let python = service
        .create_skill(NewSkill {
            name: "Python".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap();
    let js = service
        .create_skill(NewSkill {
            name: "JavaScript".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap();

    // Renaming onto another skill's name conflicts.
    let err = service
        .update_skill(SkillUpdate {
            id: js.id.clone(),
            name: "Python".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap_err();
    assert!(matches!(err, SkillError::DuplicateName));

    // Re-saving a skill under its own name is fine.
    let updated = service
        .update_skill(SkillUpdate {
            id: python.id,
            name: "Python".to_string(),
            category: SkillCategory::Leadership,
        })
        .unwrap();
    assert_eq!(updated.category, SkillCategory::Leadership);
}

#[test]
fn test_name_validation() {
    let db = common::setup_db();
    let service = SkillService::new(db.pool.clone());

    let err = service
        .create_skill(NewSkill {
            name: "".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap_err();
    assert!(matches!(err, SkillError::InvalidData(_)));

    let err = service
        .create_skill(NewSkill {
            name: "x".repeat(MAX_SKILL_NAME_LEN + 1),
            category: SkillCategory::Technical,
        })
        .unwrap_err();
    assert!(matches!(err, SkillError::InvalidData(_)));
}

#[test]
fn test_list_newest_first() {
    let db = common::setup_db();
    let service = SkillService::new(db.pool.clone());

    for name in ["JavaScript", "TypeScript", "Teamwork"] {
        service
            .create_skill(NewSkill {
                name: name.to_string(),
                category: SkillCategory::Technical,
            })
            .unwrap();
    }

    let listed = service.list_skills().unwrap();
    assert_eq!(listed.len(), 3);
}

#[test]
fn test_delete_skill() {
    let db = common::setup_db();
    let service = SkillService::new(db.pool.clone());

    let skill = service
        .create_skill(NewSkill {
            name: "Angular".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap();
    service.delete_skill(&skill.id).unwrap();

    let err = service.delete_skill(&skill.id).unwrap_err();
    assert!(matches!(err, SkillError::NotFound(_)));
}

#[test]
fn test_delete_referenced_skill_rejected() {
    let db = common::setup_db();
    let service = SkillService::new(db.pool.clone());
    let goal_service = GoalService::new(db.pool.clone());

    let skill = service
        .create_skill(NewSkill {
            name: "React".to_string(),
            category: SkillCategory::Technical,
        })
        .unwrap();
    goal_service
        .add_goal(
            Some("u1"),
            NewGoal {
                skill_id: skill.id.clone(),
                desired_proficiency: ProficiencyLevel::Intermediate,
                notes: String::new(),
            },
        )
        .unwrap();

    // No cascade is declared: a skill referenced by a goal cannot be
    // removed from the catalog.
    let err = service.delete_skill(&skill.id).unwrap_err();
    assert!(matches!(err, SkillError::DatabaseError(_)));

    // The skill and the goal both survive.
    assert_eq!(service.get_skill(&skill.id).unwrap().name, "React");
    assert_eq!(goal_service.list_goals(Some("u1")).unwrap().len(), 1);
}

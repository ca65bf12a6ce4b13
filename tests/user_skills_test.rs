use skilltrack_core::insights::InsightsService;
use skilltrack_core::models::{GoalStatus, ProficiencyLevel, SkillCategory};
use skilltrack_core::user_skills::{
    NewUserSkillEntry, UserSkillError, UserSkillService, UserSkillServiceTrait, UserSkillUpdate,
};
use skilltrack_core::goals::{GoalService, GoalServiceTrait, NewGoal};

mod common;

fn entry(skill_id: &str, level: ProficiencyLevel) -> NewUserSkillEntry {
    NewUserSkillEntry {
        skill_id: skill_id.to_string(),
        proficiency_level: level,
    }
}

#[test]
fn test_add_and_list_user_skills() {
    let db = common::setup_db();
    let react = common::seed_skill(&db.pool, "React", SkillCategory::Technical);
    let teamwork = common::seed_skill(&db.pool, "Teamwork", SkillCategory::SoftSkills);
    let service = UserSkillService::new(db.pool.clone());

    let created = service
        .add_user_skills(
            Some("u1"),
            vec![
                entry(&react.id, ProficiencyLevel::Intermediate),
                entry(&teamwork.id, ProficiencyLevel::Advanced),
            ],
        )
        .unwrap();
    assert_eq!(created.len(), 2);

    let listed = service.list_user_skills(Some("u1")).unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|r| r.skill.name == "React"));

    assert!(service.list_user_skills(Some("u2")).unwrap().is_empty());
}

#[test]
fn test_add_skips_already_recorded_skills() {
    let db = common::setup_db();
    let react = common::seed_skill(&db.pool, "React", SkillCategory::Technical);
    let python = common::seed_skill(&db.pool, "Python", SkillCategory::Technical);
    let service = UserSkillService::new(db.pool.clone());

    service
        .add_user_skills(Some("u1"), vec![entry(&react.id, ProficiencyLevel::Beginner)])
        .unwrap();

    // Only the genuinely new skill is recorded; the existing one is skipped
    // rather than overwritten.
    let created = service
        .add_user_skills(
            Some("u1"),
            vec![
                entry(&react.id, ProficiencyLevel::Advanced),
                entry(&python.id, ProficiencyLevel::Beginner),
            ],
        )
        .unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].skill_id, python.id);

    let listed = service.list_user_skills(Some("u1")).unwrap();
    let react_record = listed.iter().find(|r| r.skill.id == react.id).unwrap();
    assert_eq!(react_record.proficiency_level, ProficiencyLevel::Beginner);

    // Nothing new at all is a conflict.
    let err = service
        .add_user_skills(Some("u1"), vec![entry(&react.id, ProficiencyLevel::Advanced)])
        .unwrap_err();
    assert!(matches!(err, UserSkillError::AlreadyRecorded(_)));
}

#[test]
fn test_edit_user_skill() {
    let db = common::setup_db();
    let react = common::seed_skill(&db.pool, "React", SkillCategory::Technical);
    let angular = common::seed_skill(&db.pool, "Angular", SkillCategory::Technical);
    let service = UserSkillService::new(db.pool.clone());

    let created = service
        .add_user_skills(Some("u1"), vec![entry(&react.id, ProficiencyLevel::Beginner)])
        .unwrap();

    let updated = service
        .update_user_skill(
            Some("u1"),
            UserSkillUpdate {
                id: created[0].id.clone(),
                skill_id: angular.id.clone(),
                proficiency_level: ProficiencyLevel::Advanced,
            },
        )
        .unwrap();
    assert_eq!(updated.skill_id, angular.id);
    assert_eq!(updated.proficiency_level, ProficiencyLevel::Advanced);
}

#[test]
fn test_edit_onto_held_skill_rejected() {
    let db = common::setup_db();
    let react = common::seed_skill(&db.pool, "React", SkillCategory::Technical);
    let angular = common::seed_skill(&db.pool, "Angular", SkillCategory::Technical);
    let service = UserSkillService::new(db.pool.clone());

    let created = service
        .add_user_skills(
            Some("u1"),
            vec![
                entry(&react.id, ProficiencyLevel::Beginner),
                entry(&angular.id, ProficiencyLevel::Beginner),
            ],
        )
        .unwrap();

    let react_record = created.iter().find(|r| r.skill_id == react.id).unwrap();
    let err = service
        .update_user_skill(
            Some("u1"),
            UserSkillUpdate {
                id: react_record.id.clone(),
                skill_id: angular.id.clone(),
                proficiency_level: ProficiencyLevel::Beginner,
            },
        )
        .unwrap_err();
    assert!(matches!(err, UserSkillError::AlreadyRecorded(_)));

    // Re-saving a record onto its own skill is not a conflict.
    service
        .update_user_skill(
            Some("u1"),
            UserSkillUpdate {
                id: react_record.id.clone(),
                skill_id: react.id.clone(),
                proficiency_level: ProficiencyLevel::Advanced,
            },
        )
        .unwrap();
}

#[test]
fn test_user_skill_ownership() {
    let db = common::setup_db();
    let react = common::seed_skill(&db.pool, "React", SkillCategory::Technical);
    let service = UserSkillService::new(db.pool.clone());

    let created = service
        .add_user_skills(Some("u1"), vec![entry(&react.id, ProficiencyLevel::Beginner)])
        .unwrap();

    let edit = service.update_user_skill(
        Some("u2"),
        UserSkillUpdate {
            id: created[0].id.clone(),
            skill_id: react.id.clone(),
            proficiency_level: ProficiencyLevel::Advanced,
        },
    );
    assert!(matches!(edit.unwrap_err(), UserSkillError::NotFound(_)));

    let delete = service.delete_user_skill(Some("u2"), &created[0].id);
    assert!(matches!(delete.unwrap_err(), UserSkillError::NotFound(_)));

    // Owner can delete.
    service.delete_user_skill(Some("u1"), &created[0].id).unwrap();
    assert!(service.list_user_skills(Some("u1")).unwrap().is_empty());
}

#[test]
fn test_unauthenticated_rejected() {
    let db = common::setup_db();
    let service = UserSkillService::new(db.pool.clone());

    assert!(matches!(
        service.list_user_skills(None).unwrap_err(),
        UserSkillError::Unauthenticated
    ));
    assert!(matches!(
        service.list_user_skills(Some("  ")).unwrap_err(),
        UserSkillError::Unauthenticated
    ));
}

#[test]
fn test_proficiency_chart_points() {
    let db = common::setup_db();
    let react = common::seed_skill(&db.pool, "React", SkillCategory::Technical);
    let teamwork = common::seed_skill(&db.pool, "Teamwork", SkillCategory::SoftSkills);
    let service = UserSkillService::new(db.pool.clone());
    let insights = InsightsService::new(db.pool.clone());

    service
        .add_user_skills(
            Some("u1"),
            vec![
                entry(&react.id, ProficiencyLevel::Intermediate),
                entry(&teamwork.id, ProficiencyLevel::Advanced),
            ],
        )
        .unwrap();

    let points = insights.proficiency_chart(Some("u1")).unwrap();
    assert_eq!(points.len(), 2);

    let react_point = points.iter().find(|p| p.skill == "React").unwrap();
    assert_eq!(react_point.proficiency_level, 60);
    assert_eq!(react_point.proficiency_name, ProficiencyLevel::Intermediate);

    let teamwork_point = points.iter().find(|p| p.skill == "Teamwork").unwrap();
    assert_eq!(teamwork_point.proficiency_level, 100);
}

#[test]
fn test_goal_statistics() {
    let db = common::setup_db();
    let react = common::seed_skill(&db.pool, "React", SkillCategory::Technical);
    let python = common::seed_skill(&db.pool, "Python", SkillCategory::Technical);
    let goal_service = GoalService::new(db.pool.clone());
    let insights = InsightsService::new(db.pool.clone());

    let g1 = goal_service
        .add_goal(
            Some("u1"),
            NewGoal {
                skill_id: react.id.clone(),
                desired_proficiency: ProficiencyLevel::Intermediate,
                notes: String::new(),
            },
        )
        .unwrap();
    goal_service
        .add_goal(
            Some("u1"),
            NewGoal {
                skill_id: python.id.clone(),
                desired_proficiency: ProficiencyLevel::Beginner,
                notes: String::new(),
            },
        )
        .unwrap();
    goal_service
        .complete_goal(Some("u1"), &g1.id, GoalStatus::Completed)
        .unwrap();

    let stats = insights.goal_statistics(Some("u1")).unwrap();
    assert_eq!(stats.total_goals, 2);
    assert_eq!(stats.active_goals, 1);
    assert_eq!(stats.completed_goals, 1);
    assert_eq!(stats.inactive_goals, 0);

    // Statistics are partitioned by user.
    let other = insights.goal_statistics(Some("u2")).unwrap();
    assert_eq!(other.total_goals, 0);
}

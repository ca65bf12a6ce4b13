use std::sync::Arc;

use skilltrack_core::db::{self, DbPool};
use skilltrack_core::models::SkillCategory;
use skilltrack_core::skills::{NewSkill, Skill, SkillRepository};
use tempfile::TempDir;

pub struct TestDb {
    pub pool: Arc<DbPool>,
    // Keeps the database directory alive for the duration of the test
    _dir: TempDir,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path =
        db::init(dir.path().to_str().expect("temp dir path")).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    TestDb { pool, _dir: dir }
}

#[allow(dead_code)]
pub fn seed_skill(pool: &Arc<DbPool>, name: &str, category: SkillCategory) -> Skill {
    SkillRepository::new(pool.clone())
        .create(NewSkill {
            name: name.to_string(),
            category,
        })
        .expect("Failed to seed skill")
}

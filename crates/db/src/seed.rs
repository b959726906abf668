//! Idempotent demo-data seeding.
//!
//! Runs once per process start, after migrations and before the server
//! accepts traffic. The gate is a live row count, never a cached flag.

use sqlx::SqlitePool;

use crate::models::character::NewCharacter;
use crate::repositories::CharacterRepo;

/// The fixed demo dataset inserted into an empty store.
const SEED_CHARACTERS: [NewCharacter; 6] = [
    NewCharacter {
        name: "Luke Skywalker",
        birth_year: Some("19BBY"),
        description: Some(
            "Jedi Knight and hero of the Rebellion. Son of Anakin Skywalker.",
        ),
        faction: Some("rebel"),
    },
    NewCharacter {
        name: "Leia Organa",
        birth_year: Some("19BBY"),
        description: Some("Princess, senator, and Rebel leader."),
        faction: Some("rebel"),
    },
    NewCharacter {
        name: "Darth Vader",
        birth_year: Some("41.9BBY"),
        description: Some("Former Jedi Knight turned Sith Lord."),
        faction: Some("empire"),
    },
    NewCharacter {
        name: "Han Solo",
        birth_year: Some("29BBY"),
        description: Some("Smuggler, pilot of the Millennium Falcon."),
        faction: Some("rebel"),
    },
    NewCharacter {
        name: "Yoda",
        birth_year: Some("896BBY"),
        description: Some("Grand Master of the Jedi Order."),
        faction: Some("rebel"),
    },
    NewCharacter {
        name: "Obi-Wan Kenobi",
        birth_year: Some("57BBY"),
        description: Some("Jedi Master, mentor to Anakin and Luke."),
        faction: Some("rebel"),
    },
];

/// Insert the demo dataset if (and only if) the table is empty.
///
/// The six rows go in inside a single transaction, so partial seeding is
/// never observable. A non-empty table is left exactly as found.
pub async fn seed_characters(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let count = CharacterRepo::count(pool).await?;
    if count > 0 {
        tracing::debug!(count, "characters table already populated, skipping seed");
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for character in &SEED_CHARACTERS {
        sqlx::query(
            "INSERT INTO characters (name, birth_year, description, faction)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(character.name)
        .bind(character.birth_year)
        .bind(character.description)
        .bind(character.faction)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(rows = SEED_CHARACTERS.len(), "seeded demo characters");
    Ok(())
}

//! Embed template repository

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::{error::Result, models::TemplateRecord, Database, PersistenceError};

/// Repository for reusable embed templates
pub struct TemplateRepository<'a> {
    db: &'a Database,
}

impl<'a> TemplateRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a new template
    pub async fn insert(&self, template: &TemplateRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO embed_templates (id, firm_id, name, content, is_default, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&template.id)
        .bind(&template.firm_id)
        .bind(&template.name)
        .bind(template.content.to_string())
        .bind(template.is_default as i32)
        .bind(template.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    /// Get a template by id
    pub async fn get(&self, id: &str) -> Result<TemplateRecord> {
        let row = sqlx::query("SELECT * FROM embed_templates WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
            .ok_or_else(|| PersistenceError::NotFound(format!("template {id}")))?;

        Self::row_to_template(&row)
    }

    /// List all templates owned by a firm
    pub async fn list_for_firm(&self, firm_id: &str) -> Result<Vec<TemplateRecord>> {
        let rows = sqlx::query(
            "SELECT * FROM embed_templates WHERE firm_id = ? ORDER BY created_at ASC",
        )
        .bind(firm_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_template).collect()
    }

    /// Mark one template as the firm's default, clearing any previous
    /// default.
    pub async fn set_default(&self, firm_id: &str, id: &str) -> Result<()> {
        sqlx::query("UPDATE embed_templates SET is_default = 0 WHERE firm_id = ?")
            .bind(firm_id)
            .execute(self.db.pool())
            .await?;

        let result = sqlx::query(
            "UPDATE embed_templates SET is_default = 1 WHERE id = ? AND firm_id = ?",
        )
        .bind(id)
        .bind(firm_id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(format!("template {id}")));
        }
        Ok(())
    }

    /// Create a new template copying the content of an existing one.
    pub async fn duplicate(&self, source_id: &str, new_name: &str) -> Result<TemplateRecord> {
        let source = self.get(source_id).await?;

        let copy = TemplateRecord {
            id: Uuid::new_v4().to_string(),
            firm_id: source.firm_id,
            name: new_name.to_string(),
            content: source.content,
            is_default: false,
            created_at: Utc::now(),
        };
        self.insert(&copy).await?;
        Ok(copy)
    }

    /// Delete a template
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM embed_templates WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(format!("template {id}")));
        }
        Ok(())
    }

    fn row_to_template(row: &sqlx::sqlite::SqliteRow) -> Result<TemplateRecord> {
        Ok(TemplateRecord {
            id: row.get("id"),
            firm_id: row.get("firm_id"),
            name: row.get("name"),
            content: serde_json::from_str(row.get::<&str, _>("content"))?,
            is_default: row.get::<i32, _>("is_default") == 1,
            created_at: DateTime::parse_from_rfc3339(row.get::<&str, _>("created_at"))
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

use super::*;
use itertools::Itertools;
use std::path::PathBuf;

pub const ROUTERS_DIR: &str = "routers";

const ERROR_HANDLER: &str = "    if (isError(error)) {
      res.status(500).json({ error: error.message });
    } else {
      res.status(500).json({ error: 'Unknown error' });
    }";

/// Express CRUD router for one table.
pub struct RouterGenerator<'a> {
    table: &'a TableMetadata,
    /// Columns clients write: everything except auto-increment columns and
    /// timestamps the database fills in.
    writable: Vec<&'a str>,
}

impl<'a> RouterGenerator<'a> {
    pub fn new(table: &'a TableMetadata) -> Self {
        let writable = table
            .fields
            .iter()
            .filter(|f| !f.is_auto_increment())
            .filter(|f| {
                !(f.field_type() == FieldType::Timestamp
                    && f.default_value() == Some(Keyword::CurrentTimestamp.as_str()))
            })
            .map(FieldMetadata::name)
            .collect();
        Self { table, writable }
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(ROUTERS_DIR).join(format!("{}_router.ts", self.table.table_name))
    }

    pub fn generate(&self) -> GeneratedFile {
        GeneratedFile::new(self.path(), self.render())
    }

    pub fn render(&self) -> String {
        let table = &self.table.table_name;
        let fields = self.writable.iter().join(", ");
        let placeholders = self.writable.iter().map(|_| "?").join(", ");
        let assignments = self.writable.iter().map(|f| format!("{f} = ?")).join(", ");
        let update_values = self.writable.iter().chain(std::iter::once(&"id")).join(", ");
        let created = std::iter::once("id: (result as any).insertId")
            .chain(self.writable.iter().copied())
            .join(", ");
        let err = ERROR_HANDLER;

        format!(
            r#"import express, {{ Request, Response }} from 'express';
import pool from '../db';

const router = express.Router();

function isError(error: unknown): error is Error {{
  return error instanceof Error;
}}

// Create {table} (C)
router.post('/', async (req: Request, res: Response) => {{
  const {{ {fields} }} = req.body;
  const values = [{fields}];
  const query = `INSERT INTO {table} ({fields}) VALUES ({placeholders})`;
  try {{
    const [result] = await pool.query(query, values);
    res.status(201).json({{ {created} }});
  }} catch (error) {{
{err}
  }}
}});

// List {table} (R)
router.get('/', async (req: Request, res: Response) => {{
  try {{
    const [rows] = await pool.query('SELECT * FROM {table}');
    res.json(rows);
  }} catch (error) {{
{err}
  }}
}});

// Get one {table} (R)
router.get('/:id', async (req: Request, res: Response) => {{
  const {{ id }} = req.params;
  try {{
    const [rows] = await pool.query('SELECT * FROM {table} WHERE id = ?', [id]);
    if ((rows as any[]).length > 0) {{
      res.json((rows as any)[0]);
    }} else {{
      res.status(404).json({{ message: '{table} not found' }});
    }}
  }} catch (error) {{
{err}
  }}
}});

// Update {table} (U)
router.put('/:id', async (req: Request, res: Response) => {{
  const {{ id }} = req.params;
  const {{ {fields} }} = req.body;
  const values = [{update_values}];
  const query = `UPDATE {table} SET {assignments} WHERE id = ?`;
  try {{
    const [result] = await pool.query(query, values);
    if ((result as any).affectedRows > 0) {{
      res.json({{ id, {fields} }});
    }} else {{
      res.status(404).json({{ message: '{table} not found' }});
    }}
  }} catch (error) {{
{err}
  }}
}});

// Delete {table} (D)
router.delete('/:id', async (req: Request, res: Response) => {{
  const {{ id }} = req.params;
  try {{
    const [result] = await pool.query('DELETE FROM {table} WHERE id = ?', [id]);
    if ((result as any).affectedRows > 0) {{
      res.status(204).send();
    }} else {{
      res.status(404).json({{ message: '{table} not found' }});
    }}
  }} catch (error) {{
{err}
  }}
}});

export default router;
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    const USERS: &str = "CREATE TABLE users (id INT AUTO_INCREMENT, name VARCHAR(100), age INT, status ENUM('active','inactive') DEFAULT 'active', created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP, seen_at TIMESTAMP);";

    #[test]
    fn skips_generated_columns() {
        let t = table(USERS);
        let router = RouterGenerator::new(&t);
        assert_eq!(router.writable, ["name", "age", "status", "seen_at"]);
        assert_eq!(router.path(), PathBuf::from("routers/users_router.ts"));
    }

    #[test]
    fn renders_crud_statements() {
        let t = table(USERS);
        let code = RouterGenerator::new(&t).render();
        assert!(code.contains(
            "const query = `INSERT INTO users (name, age, status, seen_at) VALUES (?, ?, ?, ?)`;"
        ));
        assert!(code.contains(
            "const query = `UPDATE users SET name = ?, age = ?, status = ?, seen_at = ? WHERE id = ?`;"
        ));
        assert!(code.contains("const values = [name, age, status, seen_at, id];"));
        assert!(code.contains(
            "res.status(201).json({ id: (result as any).insertId, name, age, status, seen_at });"
        ));
        assert!(code.contains("pool.query('DELETE FROM users WHERE id = ?', [id])"));
        assert!(code.contains("res.status(404).json({ message: 'users not found' });"));
        assert_eq!(code.matches("router.").count(), 5);
        assert!(code.ends_with("export default router;\n"));
    }
}

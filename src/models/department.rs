// src/models/department.rs

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Product department, keyed by the `produtos.depto` code.
///
/// The service labels rows with it and the client filters and groups on it,
/// so both sides agree on the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Department {
    Acougue,
    Frios,
    Hortifruti,
    Emporio,
    Mercearia,
    Panificacao,
    Rotisserie,
    Cafeteria,
    MateriaPrima,
    Imobilizado,
    UsoEConsumo,
    Embalagens,
    FloriculturaAntigo,
    Combustivel,
    Promocao,
    Excluidos,
    Floricultura,
    Other,
}

const OTHER_LABEL: &str = "DEPARTAMENTO OUTROS";

// (code, department, label)
const TABLE: [(i32, Department, &str); 17] = [
    (1, Department::Acougue, "ACOUGUE"),
    (2, Department::Frios, "FRIOS"),
    (3, Department::Hortifruti, "HORTIFRUTI"),
    (4, Department::Emporio, "EMPORIO"),
    (5, Department::Mercearia, "MERCEARIA"),
    (6, Department::Panificacao, "PANIFICACAO"),
    (7, Department::Rotisserie, "ROTISSERIE"),
    (8, Department::Cafeteria, "CAFETERIA"),
    (9, Department::MateriaPrima, "MATERIA PRIMA"),
    (10, Department::Imobilizado, "IMOBILIZADO"),
    (11, Department::UsoEConsumo, "USO E CONSUMO"),
    (12, Department::Embalagens, "EMBALAGENS"),
    (13, Department::FloriculturaAntigo, "FLORICULTURA(ANTIGO)"),
    (14, Department::Combustivel, "COMBUSTIVEL"),
    (15, Department::Promocao, "PROMOCAO"),
    (16, Department::Excluidos, "EXCLUIDOS"),
    (17, Department::Floricultura, "FLORICULTURA"),
];

impl Department {
    pub fn from_code(code: i32) -> Self {
        TABLE
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(_, d, _)| *d)
            .unwrap_or(Department::Other)
    }

    pub fn label(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, d, _)| *d == self)
            .map(|(_, _, l)| *l)
            .unwrap_or(OTHER_LABEL)
    }

    /// Case-insensitive; unknown labels fall back to [`Department::Other`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        TABLE
            .iter()
            .find(|(_, _, l)| l.eq_ignore_ascii_case(label))
            .map(|(_, d, _)| *d)
            .unwrap_or(Department::Other)
    }
}

impl From<i32> for Department {
    fn from(code: i32) -> Self {
        Department::from_code(code)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Department::from_label(&label))
    }
}

//! AI usage log: evidence of how a generative tool was used.

use serde::{Deserialize, Serialize};

/// Tool pre-filled in a fresh log
pub const DEFAULT_MODEL: &str = "Gemini 3.1 Pro";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiUsageLog {
    pub model: String,
    pub objective: String,
    pub prompt: String,
    pub result: String,
    pub changes: String,
    pub verification: String,
}

impl Default for AiUsageLog {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            objective: String::new(),
            prompt: String::new(),
            result: String::new(),
            changes: String::new(),
            verification: String::new(),
        }
    }
}

impl AiUsageLog {
    pub fn field(&self, field: AiLogField) -> &str {
        match field {
            AiLogField::Model => &self.model,
            AiLogField::Objective => &self.objective,
            AiLogField::Prompt => &self.prompt,
            AiLogField::Result => &self.result,
            AiLogField::Changes => &self.changes,
            AiLogField::Verification => &self.verification,
        }
    }

    pub(crate) fn set(&mut self, field: AiLogField, value: String) {
        match field {
            AiLogField::Model => self.model = value,
            AiLogField::Objective => self.objective = value,
            AiLogField::Prompt => self.prompt = value,
            AiLogField::Result => self.result = value,
            AiLogField::Changes => self.changes = value,
            AiLogField::Verification => self.verification = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiLogField {
    Model,
    Objective,
    Prompt,
    Result,
    Changes,
    Verification,
}

impl AiLogField {
    pub const ALL: [AiLogField; 6] = [
        AiLogField::Model,
        AiLogField::Objective,
        AiLogField::Prompt,
        AiLogField::Result,
        AiLogField::Changes,
        AiLogField::Verification,
    ];

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            AiLogField::Model => "Herramienta / Modelo",
            AiLogField::Objective => "Objetivo del Prompt",
            AiLogField::Prompt => "Prompt Usado",
            AiLogField::Result => "Qué Devolvió",
            AiLogField::Changes => "Qué Cambié Yo",
            AiLogField::Verification => "Qué Verifiqué",
        }
    }

    /// Bullet label in the exported report; the model is not exported.
    pub fn report_label(self) -> Option<&'static str> {
        match self {
            AiLogField::Model => None,
            AiLogField::Objective => Some("Objetivo"),
            AiLogField::Prompt => Some("Prompt"),
            AiLogField::Result => Some("Resultado"),
            AiLogField::Changes => Some("Cambios"),
            AiLogField::Verification => Some("Verificación"),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AiLogField::Model => "Ej: Gemini 3.1 Pro",
            AiLogField::Objective => "¿Qué querías conseguir?",
            AiLogField::Prompt => "Copia aquí tu prompt...",
            AiLogField::Result => "Resumen de la respuesta...",
            AiLogField::Changes => "Tus correcciones...",
            AiLogField::Verification => "Tus comprobaciones...",
        }
    }
}

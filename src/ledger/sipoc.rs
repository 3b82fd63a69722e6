//! SIPOC record for the winning process.

use serde::{Deserialize, Serialize};

/// Suppliers, Inputs, Process, Outputs, Customers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SipocRecord {
    pub suppliers: String,
    pub inputs: String,
    pub process: String,
    pub outputs: String,
    pub customers: String,
}

impl SipocRecord {
    pub fn field(&self, field: SipocField) -> &str {
        match field {
            SipocField::Suppliers => &self.suppliers,
            SipocField::Inputs => &self.inputs,
            SipocField::Process => &self.process,
            SipocField::Outputs => &self.outputs,
            SipocField::Customers => &self.customers,
        }
    }

    pub(crate) fn set(&mut self, field: SipocField, value: String) {
        match field {
            SipocField::Suppliers => self.suppliers = value,
            SipocField::Inputs => self.inputs = value,
            SipocField::Process => self.process = value,
            SipocField::Outputs => self.outputs = value,
            SipocField::Customers => self.customers = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SipocField {
    Suppliers,
    Inputs,
    Process,
    Outputs,
    Customers,
}

impl SipocField {
    /// Report and form order
    pub const ALL: [SipocField; 5] = [
        SipocField::Suppliers,
        SipocField::Inputs,
        SipocField::Process,
        SipocField::Outputs,
        SipocField::Customers,
    ];

    /// Heading used in the exported report
    pub fn heading(self) -> &'static str {
        match self {
            SipocField::Suppliers => "Suppliers",
            SipocField::Inputs => "Inputs",
            SipocField::Process => "Process",
            SipocField::Outputs => "Outputs",
            SipocField::Customers => "Customers",
        }
    }

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            SipocField::Process => "Process (4-6 pasos)",
            other => other.heading(),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SipocField::Suppliers => "¿Quién entrega la información?",
            SipocField::Inputs => "¿Qué se necesita para empezar?",
            SipocField::Process => "1. Recibir... 2. Validar... 3. ...",
            SipocField::Outputs => "¿Qué se obtiene al final?",
            SipocField::Customers => "¿Quién recibe el resultado?",
        }
    }
}

//! Guided questions ("pistas") per track.

use crate::domain::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStep {
    pub question: &'static str,
    pub placeholder: &'static str,
}

static ITSM: [GuideStep; 3] = [
    GuideStep {
        question: "¿Cuál es el trigger principal de tu proceso de Triage?",
        placeholder: "Ej: Llega un correo al buzón de soporte...",
    },
    GuideStep {
        question: "¿Qué datos son críticos para clasificar el ticket?",
        placeholder: "Ej: Categoría, Urgencia, Usuario...",
    },
    GuideStep {
        question: "¿Cuál es la restricción técnica más fuerte?",
        placeholder: "Ej: El sistema legado no permite automatizar el cierre...",
    },
];

static HR: [GuideStep; 3] = [
    GuideStep {
        question: "¿Cómo se inicia la solicitud de contratación?",
        placeholder: "Ej: El manager rellena el formulario en el portal...",
    },
    GuideStep {
        question: "¿Qué documentos PII se manejan en este paso?",
        placeholder: "Ej: DNI, Contrato firmado, Datos bancarios...",
    },
    GuideStep {
        question: "¿Quién es el aprobador final del proceso?",
        placeholder: "Ej: Director de área y HR Business Partner...",
    },
];

static PROC: [GuideStep; 3] = [
    GuideStep {
        question: "¿Qué dispara la necesidad de una nueva compra?",
        placeholder: "Ej: Stock por debajo del mínimo o solicitud de proyecto...",
    },
    GuideStep {
        question: "¿Qué validaciones de compliance son obligatorias?",
        placeholder: "Ej: Verificación de paraísos fiscales, solvencia...",
    },
    GuideStep {
        question: "¿Cuál es el output que recibe el proveedor?",
        placeholder: "Ej: Orden de compra firmada en PDF...",
    },
];

/// The guided sequence for a track.
pub fn guide_steps(track: Track) -> &'static [GuideStep] {
    match track {
        Track::Itsm => &ITSM,
        Track::Hr => &HR,
        Track::Proc => &PROC,
    }
}

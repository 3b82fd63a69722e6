//! Lesson cards shown in the feed.

use crate::domain::Track;

/// A micro-lesson card.
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    pub tag: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    itsm: &'static [&'static str],
    hr: &'static [&'static str],
    proc: &'static [&'static str],
    /// The micro-deliverable the learner writes after reading
    pub check: &'static str,
}

impl Lesson {
    /// Examples for the selected track.
    pub fn examples(&self, track: Track) -> &'static [&'static str] {
        match track {
            Track::Itsm => self.itsm,
            Track::Hr => self.hr,
            Track::Proc => self.proc,
        }
    }
}

pub static LESSONS: [Lesson; 3] = [
    Lesson {
        tag: "M2-S10 · Medición",
        title: "Baseline: medir antes de cambiar",
        text: "Sin baseline no puedes demostrar mejora. Es el punto de partida real.",
        itsm: &["Valor: % misrouting", "Coste: AHT triage", "Riesgo: % P1 mal clasificados"],
        hr: &["Valor: tiempo respuesta", "Coste: €/caso", "Riesgo: incidentes PII"],
        proc: &["Valor: lead time", "Coste: iteraciones doc", "Riesgo: excepciones sin trazabilidad"],
        check: "Escribe 1 métrica valor/coste/riesgo y cómo la medirías.",
    },
    Lesson {
        tag: "M2-S10 · Procesos",
        title: "Nivel L1: Verbo + Objeto",
        text: "Un proceso L1 define el 'qué' se hace, no el 'cómo'. Debe ser claro y repetible.",
        itsm: &["Gestionar Incidente", "Validar Acceso", "Aprobar Cambio"],
        hr: &["Registrar Candidato", "Validar Nómina", "Aprobar Vacaciones"],
        proc: &["Validar Proveedor", "Registrar Pedido", "Aprobar Factura"],
        check: "Escribe 3 procesos L1 de tu área siguiendo la regla Verbo + Objeto.",
    },
    Lesson {
        tag: "M2-S10 · Priorización",
        title: "Impacto vs Esfuerzo",
        text: "No todos los procesos valen lo mismo. Priorizamos por valor de negocio y facilidad.",
        itsm: &["Impacto: Reducción de caídas", "Esfuerzo: Integración API"],
        hr: &["Impacto: Experiencia empleado", "Esfuerzo: Cambio de política"],
        proc: &["Impacto: Ahorro en compras", "Esfuerzo: Portal proveedores"],
        check: "Identifica un proceso de 'bajo esfuerzo' y 'alto impacto' en tu track.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_lesson_has_examples_for_every_track() {
        for lesson in &LESSONS {
            for track in Track::ALL {
                assert!(!lesson.examples(track).is_empty(), "{} / {}", lesson.title, track);
            }
        }
    }

    #[test]
    fn test_examples_follow_track() {
        assert_eq!(LESSONS[1].examples(Track::Proc)[2], "Aprobar Factura");
        assert_eq!(LESSONS[1].examples(Track::Hr)[0], "Registrar Candidato");
    }
}

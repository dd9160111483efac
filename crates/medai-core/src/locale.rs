//! Static string tables for the two supported languages
//!
//! [`copy`] is a pure lookup; nothing in the interaction core depends on it.

use crate::types::Language;

#[derive(Debug)]
pub struct HeroTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub try_demo: &'static str,
    pub see_story: &'static str,
}

#[derive(Debug)]
pub struct ProblemTexts {
    pub title: &'static str,
    pub points: [&'static str; 3],
}

#[derive(Debug)]
pub struct PipelineTexts {
    pub title: &'static str,
    pub steps: [&'static str; 4],
    pub reproducibility: &'static str,
    pub warning: &'static str,
}

#[derive(Debug)]
pub struct PlaygroundTexts {
    pub title: &'static str,
    pub card_title: &'static str,
    pub placeholder: &'static str,
    pub classify: &'static str,
    pub classifying: &'static str,
    pub live_mode: &'static str,
    pub why: &'static str,
    pub examples: &'static str,
    pub predictions: &'static str,
}

#[derive(Debug)]
pub struct ResultsTexts {
    pub title: &'static str,
    pub accuracy: &'static str,
    pub macro_f1: &'static str,
    pub baseline: &'static str,
    pub transformer: &'static str,
    pub vs_baseline: &'static str,
    pub confusion_matrix: &'static str,
    pub matrix_hint: &'static str,
    pub true_label: &'static str,
    pub predicted_label: &'static str,
    pub cases: &'static str,
}

#[derive(Debug)]
pub struct EthicsTexts {
    pub title: &'static str,
    pub warning: &'static str,
    pub deliverables: &'static str,
    pub repo: &'static str,
    pub continue_iteration: &'static str,
}

#[derive(Debug)]
pub struct PaletteTexts {
    pub placeholder: &'static str,
    pub empty: &'static str,
    pub navigation: &'static str,
    pub actions: &'static str,
    pub paste_example: &'static str,
    pub enable_live: &'static str,
    pub disable_live: &'static str,
    pub classify_now: &'static str,
    pub switch_language: &'static str,
}

#[derive(Debug)]
pub struct DialogTexts {
    pub examples_title: &'static str,
    pub examples_description: &'static str,
    pub example_loaded_title: &'static str,
    pub example_loaded_body: &'static str,
    pub explanation_title: &'static str,
    pub explanation_description: &'static str,
    pub keywords: &'static str,
    pub confidence: &'static str,
    pub confidence_suffix: &'static str,
    pub classification_failed: &'static str,
}

/// Full string table for one language
#[derive(Debug)]
pub struct Texts {
    pub hero: HeroTexts,
    pub problem: ProblemTexts,
    pub pipeline: PipelineTexts,
    pub playground: PlaygroundTexts,
    pub results: ResultsTexts,
    pub ethics: EthicsTexts,
    pub palette: PaletteTexts,
    pub dialogs: DialogTexts,
}

static ES: Texts = Texts {
    hero: HeroTexts {
        title: "AI + Data Challenge",
        subtitle: "Clasificador de Literatura Médica",
        description: "Explora, clasifica y explica resultados en tiempo real",
        try_demo: "Probar demo",
        see_story: "Ver historia",
    },
    problem: ProblemTexts {
        title: "El Problema",
        points: [
            "Volumen masivo de papers médicos dificulta el triage eficiente",
            "Necesidad de etiquetas precisas: tema, diseño de estudio, población",
            "Riesgos de sesgo y la importancia de no sustituir criterio clínico",
        ],
    },
    pipeline: PipelineTexts {
        title: "Datos y Pipeline",
        steps: ["Ingesta", "Limpieza", "Split train/val/test", "Entrenamiento"],
        reproducibility: "Reproducibilidad garantizada (seed fija)",
        warning: "Sin datos PII - Cuidado con desbalance de clases",
    },
    playground: PlaygroundTexts {
        title: "Playground de Clasificación",
        card_title: "Clasificador Inteligente",
        placeholder: "Pega aquí tu abstract médico para clasificar...",
        classify: "Clasificar",
        classifying: "Clasificando...",
        live_mode: "Modo tiempo real",
        why: "¿Por qué?",
        examples: "Ejemplos",
        predictions: "Predicciones",
    },
    results: ResultsTexts {
        title: "Resultados y Métricas",
        accuracy: "Precisión",
        macro_f1: "Macro-F1",
        baseline: "Baseline",
        transformer: "Transformer",
        vs_baseline: "vs baseline",
        confusion_matrix: "Matriz de Confusión",
        matrix_hint: "Usa las flechas para inspeccionar una celda",
        true_label: "Verdadero",
        predicted_label: "Predicho",
        cases: "Casos",
    },
    ethics: EthicsTexts {
        title: "Consideraciones Éticas",
        warning: "No reemplaza juicio clínico. Riesgo de sesgos por dominio/idioma.",
        deliverables: "Entregables: repo, notebook, demo, README, métricas",
        repo: "Ver repositorio",
        continue_iteration: "Continuar iteración",
    },
    palette: PaletteTexts {
        placeholder: "Buscar acciones...",
        empty: "No se encontraron resultados.",
        navigation: "Navegación",
        actions: "Acciones",
        paste_example: "Pegar ejemplo de demo",
        enable_live: "Activar modo tiempo real",
        disable_live: "Desactivar modo tiempo real",
        classify_now: "Clasificar texto actual",
        switch_language: "Cambiar idioma",
    },
    dialogs: DialogTexts {
        examples_title: "Ejemplos de Abstracts",
        examples_description: "Elige cualquier ejemplo para probarlo",
        example_loaded_title: "Ejemplo cargado",
        example_loaded_body: "Texto copiado al playground",
        explanation_title: "Explicación",
        explanation_description: "¿Por qué el modelo predijo esta categoría?",
        keywords: "Palabras clave detectadas:",
        confidence: "Confianza del modelo:",
        confidence_suffix: "de confianza",
        classification_failed: "La clasificación falló",
    },
};

static EN: Texts = Texts {
    hero: HeroTexts {
        title: "AI + Data Challenge",
        subtitle: "Medical Literature Classifier",
        description: "Explore, classify and explain results in real time",
        try_demo: "Try demo",
        see_story: "See story",
    },
    problem: ProblemTexts {
        title: "The Problem",
        points: [
            "Massive volume of medical papers makes efficient triage difficult",
            "Need for precise labels: topic, study design, population",
            "Bias risks and importance of not replacing clinical judgment",
        ],
    },
    pipeline: PipelineTexts {
        title: "Data and Pipeline",
        steps: ["Ingestion", "Cleaning", "Train/val/test split", "Training"],
        reproducibility: "Guaranteed reproducibility (fixed seed)",
        warning: "No PII data - Beware of class imbalance",
    },
    playground: PlaygroundTexts {
        title: "Classification Playground",
        card_title: "Smart Classifier",
        placeholder: "Paste your medical abstract here to classify...",
        classify: "Classify",
        classifying: "Classifying...",
        live_mode: "Live mode",
        why: "Why?",
        examples: "Examples",
        predictions: "Predictions",
    },
    results: ResultsTexts {
        title: "Results and Metrics",
        accuracy: "Accuracy",
        macro_f1: "Macro-F1",
        baseline: "Baseline",
        transformer: "Transformer",
        vs_baseline: "vs baseline",
        confusion_matrix: "Confusion Matrix",
        matrix_hint: "Use the arrow keys to inspect a cell",
        true_label: "True",
        predicted_label: "Predicted",
        cases: "Cases",
    },
    ethics: EthicsTexts {
        title: "Ethical Considerations",
        warning: "Does not replace clinical judgment. Risk of domain/language bias.",
        deliverables: "Deliverables: repo, notebook, demo, README, metrics",
        repo: "View repository",
        continue_iteration: "Continue iteration",
    },
    palette: PaletteTexts {
        placeholder: "Search actions...",
        empty: "No results found.",
        navigation: "Navigation",
        actions: "Actions",
        paste_example: "Paste demo example",
        enable_live: "Enable live mode",
        disable_live: "Disable live mode",
        classify_now: "Classify current text",
        switch_language: "Switch language",
    },
    dialogs: DialogTexts {
        examples_title: "Example Abstracts",
        examples_description: "Pick any example to try it",
        example_loaded_title: "Example loaded",
        example_loaded_body: "Text copied to the playground",
        explanation_title: "Explanation",
        explanation_description: "Why did the model predict this category?",
        keywords: "Detected keywords:",
        confidence: "Model confidence:",
        confidence_suffix: "confidence",
        classification_failed: "Classification failed",
    },
};

/// Look up the string table for a language
pub fn copy(language: Language) -> &'static Texts {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_selects_language() {
        assert_eq!(copy(Language::Es).playground.classify, "Clasificar");
        assert_eq!(copy(Language::En).playground.classify, "Classify");
    }

    #[test]
    fn test_shared_title_is_identical() {
        assert_eq!(copy(Language::Es).hero.title, copy(Language::En).hero.title);
    }

    #[test]
    fn test_palette_empty_state_localized() {
        assert_eq!(copy(Language::Es).palette.empty, "No se encontraron resultados.");
        assert_eq!(copy(Language::En).palette.empty, "No results found.");
    }

    #[test]
    fn test_action_labels_do_not_collide_with_play_query() {
        // "play" must only ever match the Playground section title
        for language in [Language::Es, Language::En] {
            let palette = &copy(language).palette;
            for label in [
                palette.paste_example,
                palette.enable_live,
                palette.disable_live,
                palette.classify_now,
                palette.switch_language,
            ] {
                assert!(!label.to_lowercase().contains("play"), "{label}");
            }
        }
    }
}

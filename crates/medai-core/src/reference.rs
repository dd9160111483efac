//! Static reference data shown by the results and playground sections
//!
//! None of this is derived from live predictions; it is the fixed evaluation
//! snapshot the demo presents.

use crate::types::{Category, Language};

// ─────────────────────────────────────────────────────────────────────────────
// Metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Baseline scores the headline model is compared against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineMetrics {
    pub accuracy: f64,
    pub macro_f1: f64,
}

/// Evaluation snapshot for the results dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub accuracy: f64,
    pub macro_f1: f64,
    pub baseline: BaselineMetrics,
}

impl MetricsSnapshot {
    /// Accuracy formatted as a percentage ("82.0%")
    pub fn accuracy_percent(&self) -> String {
        format!("{:.1}%", self.accuracy * 100.0)
    }

    /// Accuracy gain over baseline in percentage points ("+8.0%")
    pub fn accuracy_gain(&self) -> String {
        format!("+{:.1}%", (self.accuracy - self.baseline.accuracy) * 100.0)
    }

    /// Macro-F1 with two decimals ("0.77")
    pub fn macro_f1_display(&self) -> String {
        format!("{:.2}", self.macro_f1)
    }

    /// Macro-F1 gain over baseline ("+0.08")
    pub fn macro_f1_gain(&self) -> String {
        format!("+{:.2}", self.macro_f1 - self.baseline.macro_f1)
    }
}

pub const METRICS: MetricsSnapshot = MetricsSnapshot {
    accuracy: 0.82,
    macro_f1: 0.77,
    baseline: BaselineMetrics {
        accuracy: 0.74,
        macro_f1: 0.69,
    },
};

// ─────────────────────────────────────────────────────────────────────────────
// Confusion Matrix
// ─────────────────────────────────────────────────────────────────────────────

const MATRIX_DIM: usize = Category::ALL.len();

/// How a matrix cell should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Diagonal: correctly classified
    Correct,
    /// Off-diagonal with at least one case
    Misclassified,
    /// Off-diagonal with zero cases
    Empty,
}

/// Square true-vs-predicted count table, indexed in [`Category::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    cells: [[u32; MATRIX_DIM]; MATRIX_DIM],
}

impl ConfusionMatrix {
    pub const fn new(cells: [[u32; MATRIX_DIM]; MATRIX_DIM]) -> Self {
        Self { cells }
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        MATRIX_DIM
    }

    /// Count of true-category `row` predicted as `col`
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32; MATRIX_DIM]> {
        self.cells.iter()
    }

    pub fn cell_kind(&self, row: usize, col: usize) -> CellKind {
        if row == col {
            CellKind::Correct
        } else if self.cell(row, col).unwrap_or(0) > 0 {
            CellKind::Misclassified
        } else {
            CellKind::Empty
        }
    }

    pub fn row_total(&self, row: usize) -> u32 {
        self.cells.get(row).map(|r| r.iter().sum()).unwrap_or(0)
    }

    pub fn diagonal_total(&self) -> u32 {
        (0..MATRIX_DIM).map(|i| self.cells[i][i]).sum()
    }

    pub fn total(&self) -> u32 {
        self.cells.iter().flat_map(|r| r.iter()).sum()
    }
}

pub const CONFUSION_MATRIX: ConfusionMatrix = ConfusionMatrix::new([
    [45, 3, 2, 1, 0, 1, 0],
    [2, 38, 1, 2, 1, 0, 1],
    [1, 1, 42, 2, 1, 0, 0],
    [0, 2, 3, 41, 1, 0, 1],
    [1, 0, 1, 2, 39, 2, 0],
    [0, 1, 0, 1, 1, 43, 1],
    [0, 0, 1, 1, 0, 2, 44],
]);

// ─────────────────────────────────────────────────────────────────────────────
// Sample abstracts
// ─────────────────────────────────────────────────────────────────────────────

pub const SAMPLE_ABSTRACTS: [&str; 3] = [
    "Estudio retrospectivo de 245 pacientes con diagnóstico de carcinoma hepatocelular tratados con sorafenib entre 2018-2022. Se evaluó la supervivencia global y tiempo hasta progresión. Los resultados muestran una mediana de supervivencia de 14.2 meses con toxicidad manejable.",
    "Análisis de cohorte prospectivo evaluando factores de riesgo cardiovascular en población mediterránea. Se incluyeron 1,847 participantes seguidos durante 5 años. La adherencia a dieta mediterránea se asoció con reducción del 23% en eventos cardiovasculares mayores.",
    "Revisión sistemática y meta-análisis de 28 estudios sobre eficacia de resonancia magnética en detección temprana de Alzheimer. La sensibilidad combinada fue del 87% y especificidad del 82% para biomarcadores de neuroimagen.",
];

/// Keywords surfaced by the "why?" explanation sheet
pub const EXPLANATION_KEYWORDS: [&str; 4] = ["tratamiento", "pacientes", "estudio", "resultados"];

// ─────────────────────────────────────────────────────────────────────────────
// Model comparison
// ─────────────────────────────────────────────────────────────────────────────

/// Models shown on the results comparison tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    Baseline,
    #[default]
    Transformer,
}

impl ModelKind {
    pub fn toggled(&self) -> Self {
        match self {
            ModelKind::Baseline => ModelKind::Transformer,
            ModelKind::Transformer => ModelKind::Baseline,
        }
    }

    /// Architecture name (not localized)
    pub fn architecture(&self) -> &'static str {
        match self {
            ModelKind::Baseline => "TF-IDF + Logistic Regression",
            ModelKind::Transformer => "DistilBERT Fine-tuned",
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        match (self, language) {
            (ModelKind::Baseline, Language::Es) => {
                "Modelo baseline rápido y interpretable. Bueno para prototipado inicial."
            }
            (ModelKind::Baseline, Language::En) => {
                "Fast, interpretable baseline model. Good for early prototyping."
            }
            (ModelKind::Transformer, Language::Es) => {
                "Modelo transformer optimizado para dominio médico. Mayor precisión y comprensión contextual."
            }
            (ModelKind::Transformer, Language::En) => {
                "Transformer model tuned for the medical domain. Higher accuracy and contextual understanding."
            }
        }
    }
}

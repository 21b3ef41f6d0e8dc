//! The set of recognised preference keys.
//!
//! A key is *known* when it matches an entry of the exact table or starts
//! with one of the wildcard prefixes (e.g. `MNE_STIM_CHANNEL_1`). Being
//! unknown never blocks a read or write; it only triggers a warning when the
//! key is written.

use std::collections::BTreeSet;

/// Keys understood by the MNE toolkit.
pub const MNE_KNOWN_KEYS: &[&str] = &[
    "MNE_3D_OPTION_ANTIALIAS",
    "MNE_3D_OPTION_DEPTH_PEELING",
    "MNE_3D_OPTION_MULTI_SAMPLES",
    "MNE_3D_OPTION_SMOOTH_SHADING",
    "MNE_3D_OPTION_THEME",
    "MNE_BROWSE_RAW_SIZE",
    "MNE_BROWSER_BACKEND",
    "MNE_BROWSER_OVERVIEW_MODE",
    "MNE_BROWSER_PRECOMPUTE",
    "MNE_BROWSER_THEME",
    "MNE_BROWSER_USE_OPENGL",
    "MNE_CACHE_DIR",
    "MNE_COREG_ADVANCED_RENDERING",
    "MNE_COREG_COPY_ANNOT",
    "MNE_COREG_FULLSCREEN",
    "MNE_COREG_GUESS_MRI_SUBJECT",
    "MNE_COREG_HEAD_HIGH_RES",
    "MNE_COREG_HEAD_OPACITY",
    "MNE_COREG_HEAD_INSIDE",
    "MNE_COREG_INTERACTION",
    "MNE_COREG_MARK_INSIDE",
    "MNE_COREG_PREPARE_BEM",
    "MNE_COREG_ORIENT_TO_SURFACE",
    "MNE_COREG_SCALE_LABELS",
    "MNE_COREG_SCALE_BY_DISTANCE",
    "MNE_COREG_SCENE_SCALE",
    "MNE_COREG_WINDOW_HEIGHT",
    "MNE_COREG_WINDOW_WIDTH",
    "MNE_COREG_SUBJECTS_DIR",
    "MNE_CUDA_DEVICE",
    "MNE_CUDA_IGNORE_PRECISION",
    "MNE_DATA",
    "MNE_DATASETS_BRAINSTORM_PATH",
    "MNE_DATASETS_EEGBCI_PATH",
    "MNE_DATASETS_EPILEPSY_ECOG_PATH",
    "MNE_DATASETS_HF_SEF_PATH",
    "MNE_DATASETS_MEGSIM_PATH",
    "MNE_DATASETS_MISC_PATH",
    "MNE_DATASETS_MTRF_PATH",
    "MNE_DATASETS_SAMPLE_PATH",
    "MNE_DATASETS_SOMATO_PATH",
    "MNE_DATASETS_MULTIMODAL_PATH",
    "MNE_DATASETS_FNIRS_MOTOR_PATH",
    "MNE_DATASETS_OPM_PATH",
    "MNE_DATASETS_SPM_FACE_DATASETS_TESTS",
    "MNE_DATASETS_SPM_FACE_PATH",
    "MNE_DATASETS_TESTING_PATH",
    "MNE_DATASETS_VISUAL_92_CATEGORIES_PATH",
    "MNE_DATASETS_KILOWORD_PATH",
    "MNE_DATASETS_FIELDTRIP_CMC_PATH",
    "MNE_DATASETS_PHANTOM_4DBTI_PATH",
    "MNE_DATASETS_LIMO_PATH",
    "MNE_DATASETS_REFMEG_NOISE_PATH",
    "MNE_DATASETS_SSVEP_PATH",
    "MNE_DATASETS_ERP_CORE_PATH",
    "MNE_DATASETS_UCL_OPM_AUDITORY_PATH",
    "MNE_FORCE_SERIAL",
    "MNE_KIT2FIFF_STIM_CHANNELS",
    "MNE_KIT2FIFF_STIM_CHANNEL_CODING",
    "MNE_KIT2FIFF_STIM_CHANNEL_SLOPE",
    "MNE_KIT2FIFF_STIM_CHANNEL_THRESHOLD",
    "MNE_LOGGING_LEVEL",
    "MNE_MEMMAP_MIN_SIZE",
    "MNE_REPR_HTML",
    "MNE_SKIP_FTP_TESTS",
    "MNE_SKIP_NETWORK_TESTS",
    "MNE_SKIP_TESTING_DATASET_TESTS",
    "MNE_STIM_CHANNEL",
    "MNE_TQDM",
    "MNE_USE_CUDA",
    "MNE_USE_NUMBA",
    "SUBJECTS_DIR",
];

/// Prefixes that make any key starting with them known.
pub const MNE_KNOWN_WILDCARDS: &[&str] = &["MNE_STIM_CHANNEL", "MNE_DATASETS_FNIRS", "MNE_NIRS"];

/// An immutable set of known keys plus an ordered list of wildcard prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownKeys {
    exact: BTreeSet<String>,
    wildcards: Vec<String>,
}

impl KnownKeys {
    /// Build a key set from an exact table and a list of wildcard prefixes.
    pub fn new<I, W>(exact: I, wildcards: W) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            exact: exact.into_iter().map(Into::into).collect(),
            wildcards: wildcards.into_iter().map(Into::into).collect(),
        }
    }

    /// The key set of the MNE toolkit.
    pub fn mne() -> Self {
        Self::new(
            MNE_KNOWN_KEYS.iter().copied(),
            MNE_KNOWN_WILDCARDS.iter().copied(),
        )
    }

    /// Whether `key` is an exact member of the table.
    pub fn contains(&self, key: &str) -> bool {
        self.exact.contains(key)
    }

    /// Whether `key` is an exact member or starts with a wildcard prefix.
    pub fn is_known(&self, key: &str) -> bool {
        self.contains(key) || self.wildcards.iter().any(|w| key.starts_with(w.as_str()))
    }

    /// Exact keys, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exact.iter().map(String::as_str)
    }

    /// Wildcard prefixes in declaration order.
    pub fn wildcards(&self) -> &[String] {
        &self.wildcards
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

impl Default for KnownKeys {
    fn default() -> Self {
        Self::mne()
    }
}

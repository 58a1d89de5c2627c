use serde::Deserialize;

const DEFAULT_MEM_WORDS: usize = 1024;
const DEFAULT_MAX_CYCLES: u64 = 1000;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace: bool,

    #[serde(default = "default_max_cycles")]
    pub max_cycles: u64,

    #[serde(default)]
    pub start_address: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            max_cycles: DEFAULT_MAX_CYCLES,
            start_address: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_mem_words")]
    pub instr_words: usize,

    #[serde(default = "default_mem_words")]
    pub data_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instr_words: DEFAULT_MEM_WORDS,
            data_words: DEFAULT_MEM_WORDS,
        }
    }
}

fn default_max_cycles() -> u64 {
    DEFAULT_MAX_CYCLES
}

fn default_mem_words() -> usize {
    DEFAULT_MEM_WORDS
}

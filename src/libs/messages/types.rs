#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String), // error
    ConfigModuleStorage,

    // === TIMESHEET MESSAGES ===
    FieldUpdated {
        day: String,
        field: String,
        value: String,
    },
    DayTotal(String, String), // day name, total
    WeeklyTotal(String),      // total
    WeekHeader,
    InvalidDay(String),   // raw day argument
    InvalidField(String), // raw field argument

    // === STORAGE MESSAGES ===
    StorageOpenFailed(String), // error
    WeekNotSaved,

    // === PROMPTS ===
    PromptDbFileName,
    PromptSlotKey,
}

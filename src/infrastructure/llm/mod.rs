mod azure_openai_summarizer;

pub use azure_openai_summarizer::{AzureOpenAiSummarizer, SUMMARY_CONFIDENCE, SYSTEM_PROMPT};

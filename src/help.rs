use crate::error::{Result, ToolError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Copyable,
    CopyableParagraphs,
    FindReplace,
    DataExtractor,
    PhoneExtractor,
    QueryGenerator,
    TimeIntervalGenerator,
    LineRepeater,
    CampaignBuilder,
    ListSorter,
    CaseConverter,
    Counter,
    ListComparison,
    DuplicateRemover,
}

impl Tool {
    pub const ALL: [Tool; 14] = [
        Tool::Copyable,
        Tool::CopyableParagraphs,
        Tool::FindReplace,
        Tool::DataExtractor,
        Tool::PhoneExtractor,
        Tool::QueryGenerator,
        Tool::TimeIntervalGenerator,
        Tool::LineRepeater,
        Tool::CampaignBuilder,
        Tool::ListSorter,
        Tool::CaseConverter,
        Tool::Counter,
        Tool::ListComparison,
        Tool::DuplicateRemover,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tool::Copyable => "copyable",
            Tool::CopyableParagraphs => "copyable-paragraphs",
            Tool::FindReplace => "find-replace",
            Tool::DataExtractor => "data-extractor",
            Tool::PhoneExtractor => "phone-extractor",
            Tool::QueryGenerator => "query-generator",
            Tool::TimeIntervalGenerator => "time-interval-generator",
            Tool::LineRepeater => "line-repeater",
            Tool::CampaignBuilder => "campaign-builder",
            Tool::ListSorter => "list-sorter",
            Tool::CaseConverter => "case-converter",
            Tool::Counter => "counter",
            Tool::ListComparison => "list-comparison",
            Tool::DuplicateRemover => "duplicate-remover",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tool::Copyable => "Copyable Lines",
            Tool::CopyableParagraphs => "Copyable Paragraphs",
            Tool::FindReplace => "Bulk Find & Replace",
            Tool::DataExtractor => "Email Extractor",
            Tool::PhoneExtractor => "Phone Extractor",
            Tool::QueryGenerator => "Query Generator",
            Tool::TimeIntervalGenerator => "Time Interval Generator",
            Tool::LineRepeater => "Line Repeater",
            Tool::CampaignBuilder => "Campaign Builder",
            Tool::ListSorter => "List Sorter",
            Tool::CaseConverter => "Case Converter",
            Tool::Counter => "Word & Character Counter",
            Tool::ListComparison => "List Comparison",
            Tool::DuplicateRemover => "Duplicate Remover",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::Copyable => {
                "Turns a block of text into a list of single lines. Each line can be copied \
                 on its own and is then either marked as copied or dropped from the list."
            }
            Tool::CopyableParagraphs => {
                "Works like Copyable Lines but for paragraphs. Enter up to 10 paragraphs or \
                 load several .txt files; every entry or file becomes one copyable paragraph."
            }
            Tool::FindReplace => {
                "Applies up to 10 find/replace rules to a text in one pass, in the order \
                 given. The last replacement can be undone and the output can be moved back \
                 to the input for another round."
            }
            Tool::DataExtractor => {
                "Scans text or files for email addresses, counts how often each appears and \
                 lists the unique ones. Reads .txt, .csv and Excel or OpenDocument workbooks, and \
                 .tsv in column mode."
            }
            Tool::PhoneExtractor => {
                "Finds phone numbers in text or files. In workbooks, and in CSV or TSV files \
                 in column mode, only columns whose header mentions 'phone' are read."
            }
            Tool::QueryGenerator => {
                "Builds one search query per location of a country, in the form \
                 '<service> in <location>'."
            }
            Tool::TimeIntervalGenerator => {
                "Produces a list of clock times from a start time, an interval in minutes \
                 and a number of entries."
            }
            Tool::LineRepeater => "Repeats a single line of text as many times as needed.",
            Tool::CampaignBuilder => {
                "Pairs a list of emails with rotating subjects and paragraphs and a generated \
                 send time, giving one row per email with four copyable fields."
            }
            Tool::ListSorter => {
                "Sorts a list A-Z, Z-A or numerically, reverses its order, or shuffles it."
            }
            Tool::CaseConverter => {
                "Converts text to UPPERCASE, lowercase, Title Case or Sentence case."
            }
            Tool::Counter => {
                "Counts words, characters with and without spaces, sentences and paragraphs."
            }
            Tool::ListComparison => {
                "Compares two lists and shows the items only in the first, only in the \
                 second, and in both."
            }
            Tool::DuplicateRemover => {
                "Removes repeated lines from a list, keeping the first occurrence of each."
            }
        }
    }

    pub fn faqs(&self) -> &'static [Faq] {
        match self {
            Tool::Copyable => &[
                Faq {
                    question: "What is the difference between mark and remove?",
                    answer: "With 'mark' a copied line stays in the list flagged as copied. With \
                     'remove' it disappears from the list once copied.",
                },
                Faq {
                    question: "Can a line be changed after conversion?",
                    answer: "Yes. Any line can be edited, which clears its copied flag, or deleted.",
                },
                Faq {
                    question: "Is the list kept between runs?",
                    answer: "Yes. The converted lines are stored locally until you clear them.",
                },
            ],
            Tool::CopyableParagraphs => &[
                Faq {
                    question: "How many paragraphs can I enter by hand?",
                    answer: "Up to 10. Each entry is one paragraph.",
                },
                Faq {
                    question: "How are files treated?",
                    answer: "Each file becomes one paragraph with its line breaks kept.",
                },
                Faq {
                    question: "Can I edit a paragraph afterwards?",
                    answer: "Yes, paragraphs can be edited or deleted just like lines.",
                },
            ],
            Tool::FindReplace => &[
                Faq {
                    question: "Can several rules run at once?",
                    answer: "Yes. Up to 10 rules are applied one after another, each on the output \
                     of the previous one.",
                },
                Faq {
                    question: "Are special characters treated as patterns?",
                    answer: "No. The find text is matched literally, so '.' or '*' only match \
                     themselves.",
                },
                Faq {
                    question: "What does undo do?",
                    answer: "It restores the output from before the last replace. Only one step is \
                     kept.",
                },
                Faq {
                    question: "Why did nothing happen?",
                    answer: "Replacing needs some input text and at least one rule with a non-empty \
                     find value.",
                },
            ],
            Tool::DataExtractor => &[
                Faq {
                    question: "How are duplicates handled?",
                    answer: "Emails are compared case-insensitively. Each unique address is listed \
                     once with the number of times it appeared.",
                },
                Faq {
                    question: "Which files can I load?",
                    answer: "Plain text, CSV and workbook files (.xlsx, .xlsm, .xls, .ods). Every \
                     worksheet of a workbook is read. In column mode CSV and TSV files are read \
                     as sheets too.",
                },
                Faq {
                    question: "How does column mode pick columns?",
                    answer: "Columns with a header like 'Email' or 'E-mail' are used. When there are \
                     none, the whole sheet is scanned.",
                },
            ],
            Tool::PhoneExtractor => &[
                Faq {
                    question: "How are spreadsheets read?",
                    answer: "Each worksheet is read on its own, and only columns whose header \
                     contains 'phone' are scanned. A worksheet without such a column is reported \
                     and skipped; the rest of the file still loads.",
                },
                Faq {
                    question: "Which formats are recognized?",
                    answer: "Common layouts with parentheses, dashes, dots, spaces and an optional \
                     country code, such as (123) 456-7890 or +1 123 456 7890.",
                },
                Faq {
                    question: "How are numbers grouped?",
                    answer: "Numbers are compared by their digits, so differently formatted copies of \
                     the same number count together.",
                },
            ],
            Tool::QueryGenerator => &[
                Faq {
                    question: "Where do the locations come from?",
                    answer: "The UK list is built in. City lists for the USA, Canada and Australia are \
                     downloaded when needed.",
                },
                Faq {
                    question: "Can the download addresses be changed?",
                    answer: "Yes, in the [locations] section of the configuration file.",
                },
            ],
            Tool::TimeIntervalGenerator => &[
                Faq {
                    question: "What format is the start time?",
                    answer: "24-hour HH:MM, for example 09:30 or 17:45.",
                },
                Faq {
                    question: "What unit is the interval?",
                    answer: "Minutes. A 90 minute interval gives an hour and a half between entries.",
                },
                Faq {
                    question: "Is there a limit on entries?",
                    answer: "Lists above the large-generation threshold (2500 by default) are written \
                     to a file instead of printed.",
                },
            ],
            Tool::LineRepeater => &[
                Faq {
                    question: "Is there a limit on lines?",
                    answer: "Counts above the large-generation threshold are written to a file \
                     instead of printed.",
                },
                Faq {
                    question: "Can several lines be repeated?",
                    answer: "No, one line at a time. Generate each separately and combine the output.",
                },
            ],
            Tool::CampaignBuilder => &[
                Faq {
                    question: "How many emails can I use?",
                    answer: "Any number, but only the first 100 are used. Going over the cap needs \
                     confirmation.",
                },
                Faq {
                    question: "How do subjects and paragraphs rotate?",
                    answer: "Row i gets subject i mod n and paragraph i mod n, so with two of each the \
                     rows alternate A, B, A, B.",
                },
                Faq {
                    question: "Why must there be as many subjects as paragraphs?",
                    answer: "The first subject always goes with the first paragraph, the second with \
                     the second, and so on.",
                },
                Faq {
                    question: "What does the output look like?",
                    answer: "One row per email with the email, subject, paragraph and time as \
                     separate fields.",
                },
            ],
            Tool::ListSorter => &[
                Faq {
                    question: "How does numeric sorting work?",
                    answer: "Lines are ordered by the number they start with, so 2 comes before 10. \
                     Lines without a leading number go last.",
                },
                Faq {
                    question: "What does shuffle do?",
                    answer: "It puts the lines in a random order.",
                },
            ],
            Tool::CaseConverter => &[
                Faq {
                    question: "What is Title Case?",
                    answer: "The first letter of every word is capitalized.",
                },
                Faq {
                    question: "What is Sentence case?",
                    answer: "Only the first letter of each sentence is capitalized.",
                },
            ],
            Tool::Counter => &[
                Faq {
                    question: "How are sentences counted?",
                    answer: "By runs of text ending in '.', '!' or '?'.",
                },
                Faq {
                    question: "How are paragraphs counted?",
                    answer: "Every non-blank line counts as one paragraph.",
                },
            ],
            Tool::ListComparison => &[
                Faq {
                    question: "Is the comparison case-sensitive?",
                    answer: "Not by default; 'Apple' and 'apple' match. Case sensitivity can be \
                     switched on.",
                },
                Faq {
                    question: "Which spelling is shown for shared items?",
                    answer: "The spelling from the first list.",
                },
            ],
            Tool::DuplicateRemover => &[
                Faq {
                    question: "How are duplicates found?",
                    answer: "Lines are compared after trimming, case-insensitively unless case \
                     sensitivity is switched on.",
                },
                Faq {
                    question: "Is the order kept?",
                    answer: "Yes. The first occurrence of each line stays where it was.",
                },
            ],
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().to_ascii_lowercase();
        Tool::ALL
            .iter()
            .copied()
            .find(|tool| tool.id() == id)
            .ok_or_else(|| ToolError::validation(format!("unknown tool '{}'", s.trim())))
    }
}

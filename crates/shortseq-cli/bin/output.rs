use crate::cli::OutputArg;
use serde::Serialize;
use shortseq_core::Code;
use std::io::Write;

/// Digit breakdown printed by `shortseq check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub code: String,
    pub length: usize,
    /// Most-significant digit first, matching the written code.
    pub digits: Vec<u8>,
}

impl CheckReport {
    pub fn new(code: &Code) -> Self {
        let mut digits = code.digits().as_slice().to_vec();
        digits.reverse();
        Self {
            code: code.to_string(),
            length: code.len(),
            digits,
        }
    }
}

#[derive(Serialize)]
struct CodeLine<'a> {
    code: &'a str,
}

pub struct Printer {
    format: OutputArg,
}

impl Printer {
    pub fn new(format: OutputArg) -> Self {
        Self { format }
    }

    pub fn code(&self, code: &str) -> anyhow::Result<()> {
        self.emit(&mut std::io::stdout().lock(), code, &CodeLine { code })
    }

    pub fn codes(&self, codes: impl IntoIterator<Item = Code>) -> anyhow::Result<usize> {
        self.write_codes(&mut std::io::BufWriter::new(std::io::stdout().lock()), codes)
    }

    /// Writes codes as they are produced and returns how many were written.
    fn write_codes<W: Write>(
        &self,
        out: &mut W,
        codes: impl IntoIterator<Item = Code>,
    ) -> anyhow::Result<usize> {
        let mut written = 0;
        match self.format {
            OutputArg::Plain => {
                for code in codes {
                    writeln!(out, "{code}")?;
                    written += 1;
                }
            }
            OutputArg::Json => {
                out.write_all(b"{\"codes\":[")?;
                for code in codes {
                    if written > 0 {
                        out.write_all(b",")?;
                    }
                    serde_json::to_writer(&mut *out, &code)?;
                    written += 1;
                }
                out.write_all(b"]}\n")?;
            }
        }
        out.flush()?;
        Ok(written)
    }

    pub fn check(&self, report: &CheckReport) -> anyhow::Result<()> {
        let plain = format!(
            "{} is valid: {} digit(s) {:?}",
            report.code, report.length, report.digits
        );
        self.emit(&mut std::io::stdout().lock(), &plain, report)
    }

    fn emit<W: Write, T: Serialize>(&self, out: &mut W, plain: &str, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputArg::Plain => writeln!(out, "{plain}")?,
            OutputArg::Json => writeln!(out, "{}", serde_json::to_string(value)?)?,
        }
        Ok(())
    }
}

/// Instructional prompt sent as the system message on every request. Pins
/// down the exact header layout so replies need minimal cleanup.
pub const SYSTEM_PROMPT: &str = "\
You are a documentation expert that generates Doxygen-style documentation for SAS macros.

Follow this exact structure for the documentation header:

/**
@file {Macro_name.sas}
@brief {One-sentence functional description}
@details
{Extended markdown-formatted explanation of purpose, key functionalities, and usage context}

Syntax
@code
%macro_name(param1=, param2=, ...);
@endcode

Usage
@code
%macro_name(param1=value1, param2=value2);
/* Example of how the macro is used */
@endcode

@param [in/out] param1 (default_value if exists) Precise description with data type/format constraints
@param [in/out] param2 (default_value if exists) Precise description with data type/format constraints
@return {Explanation of return value/output}
@version <1.0>
@author <Your Name>

/* Only include this exact section if internal macros (not functions) are found, otherwise don't include this section at all */
<h4>SAS Macros</h4>
@li {macro1}.sas
@li {macro2}.sas
*/

Important rules:
1. Do not include any sections beyond those specified above
2. Do not add @ before the Syntax or Usage subsections
3. Use @code and @endcode blocks for all code examples
4. Include placeholders in <> for version and author
5. Keep descriptions clear and concise
6. Analyze the macro code to determine if each parameter is [in] or [out] based on its usage
7. Only include default values in parentheses if they are explicitly defined in the macro
8. For the SAS Macros section:
   - Only include it if internal macro calls are found in the code, and do not include macro functions
   - Use exact HTML tags <h4>SAS Macros</h4>
   - List each macro with @li followed by the macro name and .sas extension
   - Do not use asterisks or hyphens
9. Remove any markdown formatting or explanatory text from the output; only the header from /** to */ is wanted";

/// Informational `@li` list of internal macro calls. Empty when there are
/// none, so the user message carries no stray section.
pub fn macros_section(calls: &[String]) -> String {
    if calls.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n<h4>SAS Macros</h4>\n");
    for name in calls {
        out.push_str("@li ");
        out.push_str(name);
        out.push_str(".sas\n");
    }
    out
}

pub fn user_message(code: &str, calls: &[String]) -> String {
    format!(
        "Generate a Doxygen header for this SAS macro:\n\n{}\n\nInclude this exact macros section if any internal macros are found:\n{}",
        code,
        macros_section(calls)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_section_lists_each_call() {
        let calls = vec!["bar".to_string(), "baz".to_string()];
        let section = macros_section(&calls);
        assert!(section.contains("<h4>SAS Macros</h4>"));
        assert!(section.contains("@li bar.sas"));
        assert!(section.contains("@li baz.sas"));
    }

    #[test]
    fn macros_section_empty_without_calls() {
        assert_eq!(macros_section(&[]), "");
    }

    #[test]
    fn user_message_embeds_source_verbatim() {
        let code = "%macro foo(a=);\n  %bar(x=1)\n%mend;";
        let msg = user_message(code, &["bar".to_string()]);
        assert!(msg.contains(code));
        assert!(msg.contains("@li bar.sas"));
    }
}

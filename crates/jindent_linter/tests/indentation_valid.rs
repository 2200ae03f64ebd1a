//! Conformant sources must produce no indentation violations.

mod test_harness;

use jindent_checkstyle::{CheckstyleConfig, MergedConfig};
use jindent_linter::{RuleRegistry, lint_source};
use test_harness::{check, check_fixture, check_with_config};

#[test]
fn test_valid_fixture() {
    let result = check_fixture("ValidIndentation.java", &[]);
    assert!(result.actual.is_empty(), "unexpected violations at {:?}", result.actual);
}

#[test]
fn test_simple_correct_indentation() {
    let source = r#"
class Foo {
    int x;

    void bar() {
        int y = 1;
        if (true) {
            y = 2;
        }
    }
}
"#;
    let diagnostics = check(source);
    assert!(diagnostics.is_empty(), "got {diagnostics:?}");
}

#[test]
fn test_wrapped_throws() {
    let source = "class Foo {\n    void bar()\n        throws Exception {\n    }\n}\n";
    assert!(check(source).is_empty());
}

#[test]
fn test_case_indent_zero() {
    let source = r#"class Foo {
    void bar(int x) {
        switch (x) {
        case 1:
            break;
        default:
            break;
        }
    }
}
"#;
    assert!(check_with_config(source, &[("caseIndent", "0")]).is_empty());
}

#[test]
fn test_tab_width() {
    let source = "class A {\n\tint x;\n}\n";
    assert!(check_with_config(source, &[("tabWidth", "4")]).is_empty());
}

#[test]
fn test_checkstyle_config_drives_offsets() {
    let xml = r#"<?xml version="1.0"?>
<module name="Checker">
    <module name="TreeWalker">
        <module name="Indentation">
            <property name="basicOffset" value="2"/>
        </module>
        <module name="NeedBraces"/>
    </module>
</module>"#;
    let source = r#"class Foo {
  void bar(boolean b) {
    if (b) {
      bar(b);
    }
  }
}
"#;

    let config = MergedConfig::new(&CheckstyleConfig::parse(xml).unwrap(), None);
    let registry = RuleRegistry::builtin();
    let rules: Vec<_> = config
        .rules
        .iter()
        .filter_map(|rule| registry.create_configured(rule))
        .collect();
    assert_eq!(rules.len(), 1);

    let result = lint_source(source, &rules).unwrap();
    assert!(result.diagnostics.is_empty(), "got {:?}", result.diagnostics);
    assert!(!check(source).is_empty());
}

#[test]
fn test_array_elements_aligned_or_indented() {
    let source = r#"class Foo {
    void bar() {
        int[] a = {1,
            2};
        int[] b = {1,
                   2};
    }
}
"#;
    assert!(check(source).is_empty());
}

#[test]
fn test_nested_call_arguments_on_wrapped_line() {
    let source = "class Foo {\n    void bar() {\n        foo(bar(\n            1));\n    }\n}\n";
    assert!(check(source).is_empty());
}

#[test]
fn test_block_keyword_after_case_label() {
    let source = r#"class Foo {
    void bar(int x, boolean b) {
        switch (x) {
            case 1: if (b) {
                    bar(x, b);
                }
                break;
            default:
                break;
        }
    }
}
"#;
    assert!(check(source).is_empty(), "got {:?}", check(source));
}

#[test]
fn test_checkstyle_guava_input() {
    let result = check_fixture(
        "InputIndentationFromGuava.java",
        &[("basicOffset", "2"), ("lineWrappingIndentation", "4"), ("tabWidth", "4")],
    );
    assert!(result.expected.is_empty());
    result.assert_perfect("InputIndentationFromGuava.java");
}

#[test]
fn test_enum_constant_body_closing_brace() {
    let source = r#"enum Strength {
  STRONG {
    int weight() {
      return 1;
    }
   },
  WEAK;

  int weight() {
    return 0;
  }
}
"#;
    assert!(check_with_config(source, &[("basicOffset", "2")]).is_empty());
}

#[test]
fn test_labels() {
    let source = r#"class Foo {
    void bar() {
        outer:
        for (int i = 0; i < 2; i++) {
            break outer;
        }
    inner:
        while (true) {
            break inner;
        }
        done: for (;;) {
            break done;
        }
    }
}
"#;
    assert!(check(source).is_empty(), "got {:?}", check(source));
}

#[test]
fn test_wrapped_method_headers() {
    let source = r#"class Foo {
    @Deprecated
    public void bar(int a,
        int b) {
    }

    Foo(int a,
            int b) {
    }
}
"#;
    assert!(check(source).is_empty(), "got {:?}", check(source));
}

#[test]
fn test_condition_wrapped_past_the_offset() {
    let source = r#"class Foo {
    void bar(boolean b) {
        if (b
                && b) {
        }
    }
}
"#;
    assert!(check(source).is_empty());
}

#[test]
fn test_wrapped_import() {
    assert!(check("import java.util\n    .List;\n\nclass Foo {\n}\n").is_empty());
}

#[test]
fn test_brace_adjustment() {
    let source = r#"class Foo {
    void bar(boolean b) {
        if (b)
          {
            bar(b);
          }
    }
}
"#;
    assert!(check_with_config(source, &[("braceAdjustment", "2")]).is_empty());
}

#[test]
fn test_anonymous_class_body() {
    let source = r#"class Foo {
    Runnable task = new Runnable() {
        public void run() {
            System.gc();
        }
    };
}
"#;
    assert!(check(source).is_empty(), "got {:?}", check(source));
}

#[test]
fn test_statements_around_blocks() {
    let source = r#"class Foo {
    static int count;

    static {
        count = 1;
    }

    void bar() {
        synchronized (this) {
            count++;
        }
        try {
            bar();
        }
        catch (RuntimeException e) {
            count = 0;
        } finally {
            count = 1;
        }
        do {
            count--;
        }
        while (count > 0);
    }
}
"#;
    assert!(check(source).is_empty(), "got {:?}", check(source));
}

#[test]
fn test_wrapped_for_clauses() {
    let source = r#"class Foo {
    void bar() {
        for (int i = 0;
            i < 2;
            i++) {
        }
    }
}
"#;
    assert!(check(source).is_empty(), "got {:?}", check(source));
}

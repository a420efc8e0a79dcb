#[cfg(test)]
mod conversion_tests {
    use crate::{
        convert, convert_nodes, parse_document, xml_to_markdown, ConvertError, ConvertOptions,
        XmlElement, XmlNode,
    };

    // Wrap member XML in a document for the `Acme` assembly
    fn acme_doc(members: &str) -> String {
        format!(
            r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>Acme</name>
    </assembly>
    <members>
        {}
    </members>
</doc>"#,
            members
        )
    }

    fn to_markdown(members: &str) -> String {
        xml_to_markdown(&acme_doc(members), &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn test_end_to_end_method_with_parameters() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Add(System.Int32,System.Int32)">
            <summary>Adds two numbers.</summary>
            <param name="a">First</param>
            <param name="b">Second</param>
        </member>"#,
        );

        let expected = "# Acme\n\n\
            ### Acme.Calc.Add(System.Int32,System.Int32)\n\n\
            Adds two numbers.\n\n\
            |Parameter|Description|\n\
            |:--|:--|\n\
            |a|First|\n\
            |b|Second|\n\n\
            ---\n\n";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let xml = acme_doc(
            r#"<member name="T:Acme.Widget"><summary>A <see cref="T:Acme.Part"/>.</summary></member>
            <member name="P:Acme.Widget.Size"><value>The size.</value></member>"#,
        );
        let root = parse_document(&xml).unwrap();

        assert_eq!(convert(&root).unwrap(), convert(&root).unwrap());
    }

    #[test]
    fn test_member_kinds_use_their_headings() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Calc"><summary>Type.</summary></member>
            <member name="F:Acme.Calc.Total"><summary>Field.</summary></member>
            <member name="P:Acme.Calc.Mode"><summary>Property.</summary></member>
            <member name="E:Acme.Calc.Changed"><summary>Event.</summary></member>
            <member name="M:Acme.Calc.Reset"><summary>Method.</summary></member>
            <member name="N:Acme"><summary>Unknown.</summary></member>"#,
        );

        assert!(markdown.contains("## Acme.Calc\n\nType."));
        assert!(markdown.contains("### Acme.Calc.Total\n\nField."));
        assert!(markdown.contains("### Acme.Calc.Mode\n\nProperty."));
        assert!(markdown.contains("### Acme.Calc.Changed\n\nEvent."));
        assert!(markdown.contains("### Acme.Calc.Reset\n\nMethod."));
        assert!(!markdown.contains("Unknown."));
        assert_eq!(markdown.matches("---").count(), 5);
    }

    #[test]
    fn test_namespace_doc_is_hoisted_into_title() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.NamespaceDoc"><summary>The Acme namespace.</summary></member>
            <member name="T:Acme.Widget"><summary>A widget.</summary></member>"#,
        );

        assert_eq!(
            markdown,
            "# Acme\n\nThe Acme namespace.\n\n## Acme.Widget\n\nA widget.\n\n---\n\n"
        );
        assert!(!markdown.contains("NamespaceDoc"));
    }

    #[test]
    fn test_reference_links() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Calc">
            <summary>Uses <see cref="T:Acme.Widget"/>, <see cref="T:Other.Thing"/> and <see cref="!:#Getting Started"/>.</summary>
            <seealso cref="M:Acme.Calc.Add(System.Int32,System.Int32)">the adder</seealso>
        </member>"#,
        );

        assert!(markdown.contains(
            "Uses [Acme.Widget](#acmewidget), `Other.Thing` and [Getting Started](#getting-started)."
        ));
        assert!(markdown.contains("[the adder](#acmecalcaddsystemint32systemint32)"));
    }

    #[test]
    fn test_langword_reference() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Find"><returns>The item, or <see langword="null"/>.</returns></member>"#,
        );
        assert!(markdown.contains("**Returns:** The item, or `null`."));
    }

    #[test]
    fn test_inline_markup() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Add(System.Int32,System.Int32)">
            <summary>Adds <paramref name="a"/> to <c>b</c>.</summary>
            <returns>
                The sum.
            </returns>
        </member>"#,
        );

        assert!(markdown.contains("Adds `a` to `b`."));
        assert!(markdown.contains("**Returns:** The sum.\n\n"));
    }

    #[test]
    fn test_type_parameters_then_parameters_share_one_table() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Map``1(``0)">
            <typeparam name="T">Item type.</typeparam>
            <param name="item">The item.</param>
        </member>"#,
        );

        assert!(markdown.contains(
            "|Type Parameter|Description|\n|:--|:--|\n|T|Item type.|\n|item|The item.|\n"
        ));
        assert!(!markdown.contains("|Parameter|Description|"));
    }

    #[test]
    fn test_exception_rows_continue_one_table() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Divide(System.Int32,System.Int32)">
            <param name="a">Dividend.</param>
            <exception cref="T:System.DivideByZeroException">When <paramref name="b"/> is zero.</exception>
            <exception cref="T:System.OverflowException">Too big.</exception>
        </member>"#,
        );

        assert!(markdown.contains(
            "|a|Dividend.|\n\n|Exception|Description|\n|:--|:--|\n\
             |System.DivideByZeroException|When `b` is zero.|\n\
             |System.OverflowException|Too big.|\n"
        ));
    }

    #[test]
    fn test_table_list_renders_rows() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Cli">
            <remarks>
                <list type="table">
                    <listheader><term>Flag</term><description>Meaning</description></listheader>
                    <item><term>-i</term><description>Input file.</description></item>
                    <item><term>-o</term><description>Output file.</description></item>
                </list>
            </remarks>
        </member>"#,
        );

        assert!(markdown.contains(
            "|Flag|Meaning|\n|:--|:--|\n|-i|Input file.|\n|-o|Output file.|\n"
        ));
    }

    #[test]
    fn test_table_list_without_header_gets_default_header() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Cli">
            <remarks><list type="table"><item><term>-v</term><description>Verbose.</description></item></list></remarks>
        </member>"#,
        );

        assert!(markdown.contains("|Term|Description|\n|:--|:--|\n|-v|Verbose.|\n"));
    }

    #[test]
    fn test_bullet_and_number_lists() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Steps">
            <remarks>
                <list type="bullet">
                    <item><description>One</description></item>
                    <item><term>Two</term><description>second</description></item>
                </list>
                <list type="number">
                    <item><description>First step</description></item>
                </list>
            </remarks>
        </member>"#,
        );

        assert!(markdown.contains("* One\n* Two: second\n"));
        assert!(markdown.contains("1. First step\n"));
    }

    #[test]
    fn test_list_style_does_not_leak_to_sibling_list() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Steps">
            <remarks>
                <list type="table"><item><term>a</term><description>b</description></item></list>
                <list><item>plain</item></list>
                <list type="bullet"><item>c</item></list>
            </remarks>
        </member>"#,
        );

        assert!(markdown.contains("|a|b|\n"));
        assert!(markdown.contains("\nplain\n"));
        assert!(markdown.contains("* c\n"));
        assert!(!markdown.contains("|c|"));
    }

    #[test]
    fn test_nested_list_stays_inside_outer_item() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Steps">
            <remarks>
                <list type="number">
                    <item>outer <list type="bullet"><item>inner</item></list></item>
                    <item>after</item>
                </list>
            </remarks>
        </member>"#,
        );

        assert_eq!(
            markdown,
            "# Acme\n\n## Acme.Steps\n\n1. outer\n\n   * inner\n1. after\n\n---\n\n"
        );
    }

    #[test]
    fn test_block_after_parameter_table_is_separated() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Add(System.Int32)">
            <param name="a">First</param>
            <seealso cref="T:Other.X"/>
        </member>"#,
        );

        assert!(markdown.contains("|a|First|\n\n`Other.X`\n\n---\n\n"));
    }

    #[test]
    fn test_summary_after_type_parameter_table_is_separated() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Sum``1">
            <typeparam name="T">t</typeparam>
            <summary>Sum.</summary>
        </member>"#,
        );

        assert!(markdown.contains("|T|t|\n\nSum.\n\n---\n\n"));
    }

    #[test]
    fn test_text_after_exception_table_is_separated() {
        let nodes = vec![
            XmlNode::Element(
                XmlElement::new("exception")
                    .with_attribute("cref", "T:System.IO.IOException")
                    .with_text("Disk failure."),
            ),
            XmlNode::Text("Trailing note.".to_string()),
        ];

        assert_eq!(
            convert_nodes(&nodes).unwrap(),
            "\n|Exception|Description|\n|:--|:--|\n|System.IO.IOException|Disk failure.|\n\nTrailing note."
        );
    }

    #[test]
    fn test_table_item_without_cells_keeps_its_text() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Cli">
            <remarks><list type="table"><item>plain text</item></list></remarks>
        </member>"#,
        );

        assert!(markdown.contains("|Term|Description|\n|:--|:--|\n|plain text||\n"));
    }

    #[test]
    fn test_table_item_with_description_only() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Cli">
            <remarks><list type="table"><item><description>Only.</description></item></list></remarks>
        </member>"#,
        );

        assert!(markdown.contains("|:--|:--|\n||Only.|\n"));
    }

    #[test]
    fn test_space_between_inline_code_spans_is_kept() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Pair"><summary>x <c>a</c> <c>b</c></summary></member>"#,
        );

        assert!(markdown.contains("x `a` `b`\n\n"));
    }

    #[test]
    fn test_example_block_is_deindented() {
        let markdown = to_markdown(
            r#"<member name="M:Acme.Calc.Add(System.Int32,System.Int32)">
            <example>
            var calc = new Calc();
            if (calc.Ready)
                calc.Add(1, 2);
            </example>
        </member>"#,
        );

        assert!(markdown.contains(
            "**C# Example**\n```c#\nvar calc = new Calc();\nif (calc.Ready)\n    calc.Add(1, 2);\n```\n"
        ));
    }

    #[test]
    fn test_example_uses_configured_language() {
        let options = ConvertOptions {
            example_label: "Example".to_string(),
            example_language: "csharp".to_string(),
            example_indent_offset: 0,
        };
        let xml = acme_doc(r#"<member name="M:Acme.Run"><example>Run();</example></member>"#);
        let markdown = xml_to_markdown(&xml, &options).unwrap();

        assert!(markdown.contains("**Example**\n```csharp\nRun();\n```\n"));
    }

    #[test]
    fn test_whitespace_normalization() {
        let markdown = to_markdown(
            r#"<member name="T:Acme.Widget">
            <summary>
                A   widget
                that spans lines.
            </summary>
            <remarks><para>One.</para><para>Two.</para></remarks>
        </member>"#,
        );

        assert!(markdown.contains("A widget that spans lines.\n\n"));
        assert!(markdown.contains("One.\n\nTwo."));
        assert!(!markdown.contains("\n\n\n"));
    }

    #[test]
    fn test_unknown_element_fails() {
        let xml = acme_doc(r#"<member name="T:Acme.Widget"><summary><b>bold</b></summary></member>"#);
        let result = xml_to_markdown(&xml, &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::UnknownElement(tag)) if tag == "b"));
    }

    #[test]
    fn test_missing_assembly_name_fails() {
        let result = xml_to_markdown(
            "<doc><assembly/><members/></doc>",
            &ConvertOptions::default(),
        );
        assert!(matches!(result, Err(ConvertError::MissingElement { child, .. }) if child == "name"));
    }

    #[test]
    fn test_missing_cref_fails() {
        let xml = acme_doc(r#"<member name="T:Acme.Widget"><summary><see/></summary></member>"#);
        let result = xml_to_markdown(&xml, &ConvertOptions::default());
        assert!(matches!(
            result,
            Err(ConvertError::MissingAttribute { attribute, .. }) if attribute == "cref"
        ));
    }

    #[test]
    fn test_convert_sibling_nodes() {
        let nodes = vec![
            XmlNode::Element(XmlElement::new("param").with_attribute("name", "a").with_text("First")),
            XmlNode::Element(XmlElement::new("param").with_attribute("name", "b").with_text("Second")),
        ];

        assert_eq!(
            convert_nodes(&nodes).unwrap(),
            "\n|Parameter|Description|\n|:--|:--|\n|a|First|\n|b|Second|\n"
        );
    }

    #[test]
    fn test_conversions_run_on_separate_threads() {
        let first = parse_document(&acme_doc(r#"<member name="T:Acme.A"><summary>A.</summary></member>"#)).unwrap();
        let second = parse_document(&acme_doc(r#"<member name="T:Acme.B"><summary>B.</summary></member>"#)).unwrap();

        let (a, b) = std::thread::scope(|scope| {
            let a = scope.spawn(|| convert(&first).unwrap());
            let b = scope.spawn(|| convert(&second).unwrap());
            (a.join().unwrap(), b.join().unwrap())
        });

        assert!(a.contains("## Acme.A") && !a.contains("Acme.B"));
        assert!(b.contains("## Acme.B") && !b.contains("Acme.A"));
    }
}

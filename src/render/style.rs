//! Embedded stylesheet for the HTML chart.

/// Screen and print styles. The header row sticks to the top and the row
/// labels stick to the left when the table scrolls.
pub(crate) const STYLESHEET: &str = r#"        body {
            font-family: "Microsoft YaHei", "PingFang SC", "Noto Sans CJK SC", sans-serif;
            margin: 20px;
        }
        h1 {
            text-align: center;
            color: #333;
        }
        table {
            width: 95%;
            margin: 20px auto;
            border-collapse: collapse;
            border: 2px solid #666;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
        }
        th, td {
            border: 1px solid #ccc;
            padding: 10px 8px;
            text-align: center;
            min-height: 50px;
            vertical-align: middle;
            font-size: 11pt;
            word-wrap: break-word;
        }
        th {
            background-color: #f2f2f2;
            font-weight: bold;
        }
        td {
            background-color: #fff;
            line-height: 1.4;
        }
        .empty-seat {
            color: #999;
            font-style: italic;
            background-color: #fafafa;
        }
        thead th {
            position: sticky;
            top: 0;
            background-color: #e0e0e0;
            z-index: 10;
        }
        tbody th {
            position: sticky;
            left: 0;
            z-index: 5;
        }
        thead th:first-child {
            left: 0;
            z-index: 15;
        }
        @media print {
            body { margin: 0; }
            table { width: 100%; box-shadow: none; }
            thead th, tbody th { position: static; }
        }
"#;

//! HTML emission: one self-contained slideshow artifact.

use log::warn;

use super::options::RenderOptions;
use super::richtext::{escape_html, render_rich_text};
use crate::error::Warning;
use crate::model::{Element, ElementKind, Package, ResourceRegistry, Slide};

/// Canvas width substituted when the board declares none. Applied at
/// emission time only; the model keeps the field absent.
pub const DEFAULT_WIDTH: f32 = 1280.0;

/// Canvas height substituted when the board declares none.
pub const DEFAULT_HEIGHT: f32 = 720.0;

/// Profile URL template the creator name links to.
const PROFILE_URL_BASE: &str = "https://k.seewo.com/personalPage/";

/// Convert a loaded package to a complete HTML document.
pub fn to_html(package: &Package, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(package)
}

/// HTML renderer.
///
/// Assembles the whole artifact into one buffer so the caller can write it
/// in a single operation.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a package to an HTML string.
    pub fn render(&self, package: &Package) -> String {
        let width = package.board.width.unwrap_or(DEFAULT_WIDTH);
        let height = package.board.height.unwrap_or(DEFAULT_HEIGHT);
        let title = self
            .options
            .title
            .as_deref()
            .unwrap_or(&package.metadata.name);

        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str(&format!("    <title>{}</title>\n", escape_html(title)));
        out.push_str("    <style>\n");
        out.push_str(STYLE_BODY);
        out.push_str(&format!(
            "        #container {{\n            position: relative;\n            width: {width}px;\n            height: {height}px;\n            background-color: white;\n            overflow: hidden;\n            box-shadow: 0 0 20px rgba(0,0,0,0.5);\n        }}\n"
        ));
        out.push_str(STYLE_REST);
        out.push_str("    </style>\n</head>\n<body>\n    <div id=\"container\">\n");

        // Slide layers follow the board order exactly; an order entry with
        // no matching slide is skipped without shifting later slides.
        for (index, id) in package.board.slide_order.iter().enumerate() {
            let Some(slide) = package.get_slide(id) else {
                continue;
            };
            self.render_slide(&mut out, slide, index == 0, &package.registry);
        }

        out.push_str("    </div>\n");
        self.render_chrome(&mut out, package);
        out.push_str(SCRIPT);
        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_slide(
        &self,
        out: &mut String,
        slide: &Slide,
        active: bool,
        registry: &ResourceRegistry,
    ) {
        let class = if active { "slide active" } else { "slide" };
        let style = slide
            .background
            .as_deref()
            .and_then(|source| resolve(registry, source))
            .map(|path| format!(" style=\"background-image: url('{}');\"", escape_html(path)))
            .unwrap_or_default();

        out.push_str(&format!("<div class=\"{class}\"{style}>\n"));
        for element in &slide.elements {
            self.render_element(out, element, registry);
        }
        out.push_str("</div>\n");
    }

    fn render_element(&self, out: &mut String, element: &Element, registry: &ResourceRegistry) {
        let geo = element.geometry;
        let mut style = format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            geo.x, geo.y, geo.width, geo.height
        );
        // A zero rotation emits no transform declaration at all.
        if geo.rotation != 0.0 {
            style.push_str(&format!(" transform: rotate({}deg);", geo.rotation));
        }

        let content = match &element.kind {
            ElementKind::Text(text) => render_rich_text(text),
            ElementKind::Activity { text, background } => {
                if let Some(path) = background
                    .as_deref()
                    .and_then(|source| resolve(registry, source))
                {
                    style.push_str(&format!(
                        " background-image: url('{}'); background-size: 100% 100%;",
                        escape_html(path)
                    ));
                }
                render_rich_text(text)
            }
            ElementKind::Image { source } => resolve(registry, source)
                .map(|path| {
                    format!(
                        "<img src=\"{}\" draggable=\"false\">",
                        escape_html(path)
                    )
                })
                .unwrap_or_default(),
            ElementKind::Unsupported => String::new(),
        };

        out.push_str(&format!(
            "<div class=\"element\" style=\"{style}\">{content}</div>\n"
        ));
    }

    /// Navigation buttons, info button, and the metadata modal.
    fn render_chrome(&self, out: &mut String, package: &Package) {
        out.push_str(
            "    <div class=\"nav-buttons\">\n\
             \x20       <button onclick=\"prevSlide()\">上一页</button>\n\
             \x20       <button onclick=\"nextSlide()\">下一页</button>\n\
             \x20   </div>\n\n\
             \x20   <div class=\"info-button\">\n\
             \x20       <button onclick=\"showInfo()\">关于文档</button>\n\
             \x20   </div>\n\n",
        );

        let meta = &package.metadata;
        let creator = escape_html(&meta.creator);
        let creator_link = format!(
            "<a href=\"{PROFILE_URL_BASE}{creator}\" target=\"_blank\">{creator}</a>"
        );
        let rows: [(&str, String); 4] = [
            ("文档名称", escape_html(&meta.name)),
            ("作者", creator_link),
            ("创建时间", escape_html(&meta.created)),
            ("上次修改时间", escape_html(&meta.modified)),
        ];

        out.push_str(
            "    <div id=\"infoModal\" class=\"modal\">\n\
             \x20       <div class=\"modal-content\">\n\
             \x20           <span class=\"close\" onclick=\"closeInfo()\">&times;</span>\n\
             \x20           <h2>文档信息</h2>\n\
             \x20           <table class=\"info-table\">\n",
        );
        for (label, value) in rows {
            out.push_str(&format!(
                "                <tr><td>{label}</td><td>{value}</td></tr>\n"
            ));
        }
        out.push_str(
            "            </table>\n\
             \x20       </div>\n\
             \x20   </div>\n\n",
        );
    }
}

/// Resolve an image reference, logging a miss as an operator diagnostic.
/// The artifact never carries a placeholder for unresolved images.
fn resolve<'a>(registry: &'a ResourceRegistry, source: &str) -> Option<&'a str> {
    let resolved = registry.resolve(source);
    if resolved.is_none() {
        warn!("{}", Warning::UnresolvedResource(source.to_string()));
    }
    resolved
}

const STYLE_BODY: &str = "        body {\n            margin: 0;\n            padding: 0;\n            background-color: #333;\n            display: flex;\n            justify-content: center;\n            align-items: center;\n            height: 100vh;\n            overflow: hidden;\n            font-family: \"Microsoft YaHei\", sans-serif;\n        }\n";

const STYLE_REST: &str = r#"        .slide {
            position: absolute;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            display: none;
            background-size: 100% 100%;
        }
        .slide.active {
            display: block;
        }
        .element {
            position: absolute;
            transform-origin: 50% 50%;
            white-space: pre-wrap;
            display: flex;
            flex-direction: column;
        }
        .element img {
            width: 100%;
            height: 100%;
            display: block;
        }
        .nav-buttons {
            position: fixed;
            bottom: 20px;
            left: 50%;
            transform: translateX(-50%);
            z-index: 1000;
        }
        .info-button {
            position: fixed;
            top: 20px;
            right: 20px;
            z-index: 1000;
        }
        button {
            padding: 10px 20px;
            font-size: 16px;
            cursor: pointer;
            background: rgba(255, 255, 255, 0.8);
            border: none;
            border-radius: 5px;
            margin: 0 5px;
        }
        button:hover {
            background: white;
        }
        .modal {
            display: none;
            position: fixed;
            z-index: 2000;
            left: 0;
            top: 0;
            width: 100%;
            height: 100%;
            overflow: auto;
            background-color: rgba(0,0,0,0.4);
        }
        .modal-content {
            background-color: #fefefe;
            margin: 15% auto;
            padding: 20px;
            border: 1px solid #888;
            width: 50%;
            border-radius: 10px;
            box-shadow: 0 4px 8px 0 rgba(0,0,0,0.2);
        }
        .close {
            color: #aaa;
            float: right;
            font-size: 28px;
            font-weight: bold;
        }
        .close:hover,
        .close:focus {
            color: black;
            text-decoration: none;
            cursor: pointer;
        }
        .info-table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 10px;
        }
        .info-table td, .info-table th {
            border: 1px solid #ddd;
            padding: 8px;
        }
        .info-table tr:nth-child(even) { background-color: #f2f2f2; }
        .info-table th {
            padding-top: 12px;
            padding-bottom: 12px;
            text-align: left;
            background-color: #4CAF50;
            color: white;
        }
"#;

// The index arithmetic in showSlide is modular, but both public commands
// guard with bounds checks first, so navigation clamps at the first and
// last slide.
const SCRIPT: &str = r#"    <script>
        let currentSlide = 0;
        const slides = document.querySelectorAll('.slide');
        const modal = document.getElementById("infoModal");

        function showSlide(n) {
            slides[currentSlide].classList.remove('active');
            currentSlide = (n + slides.length) % slides.length;
            slides[currentSlide].classList.add('active');
        }

        function nextSlide() {
            if (currentSlide < slides.length - 1) {
                showSlide(currentSlide + 1);
            }
        }

        function prevSlide() {
            if (currentSlide > 0) {
                showSlide(currentSlide - 1);
            }
        }

        function showInfo() {
            modal.style.display = "block";
        }

        function closeInfo() {
            modal.style.display = "none";
        }

        window.onclick = function(event) {
            if (event.target == modal) {
                modal.style.display = "none";
            }
        }

        document.addEventListener('keydown', (e) => {
            if (e.key === 'ArrowRight' || e.key === 'ArrowDown' || e.key === ' ') {
                nextSlide();
            } else if (e.key === 'ArrowLeft' || e.key === 'ArrowUp') {
                prevSlide();
            }
        });
    </script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, Geometry, Metadata, RichText, TextLine, TextRun};
    use std::collections::BTreeMap;

    fn package_with(board: Board, slides: Vec<Slide>, registry: ResourceRegistry) -> Package {
        let slides: BTreeMap<String, Slide> =
            slides.into_iter().map(|s| (s.id.clone(), s)).collect();
        Package {
            metadata: Metadata {
                name: "Lecture".into(),
                creator: "ann".into(),
                created: "2021-01-01".into(),
                modified: "2021-02-02".into(),
            },
            board,
            registry,
            slides,
            warnings: Vec::new(),
        }
    }

    fn render(package: &Package) -> String {
        to_html(package, &RenderOptions::default())
    }

    #[test]
    fn test_canvas_defaults_applied_at_emission_only() {
        let package = package_with(Board::default(), Vec::new(), ResourceRegistry::new());
        assert!(package.board.width.is_none());
        let html = render(&package);
        assert!(html.contains("width: 1280px"));
        assert!(html.contains("height: 720px"));
    }

    #[test]
    fn test_declared_canvas_size_wins() {
        let board = Board {
            width: Some(1920.0),
            height: Some(1080.0),
            slide_order: Vec::new(),
        };
        let html = render(&package_with(board, Vec::new(), ResourceRegistry::new()));
        assert!(html.contains("width: 1920px"));
        assert!(html.contains("height: 1080px"));
    }

    #[test]
    fn test_first_ordered_slide_is_active() {
        let board = Board {
            width: None,
            height: None,
            slide_order: vec!["a".into(), "b".into()],
        };
        let html = render(&package_with(
            board,
            vec![Slide::new("a"), Slide::new("b")],
            ResourceRegistry::new(),
        ));
        assert_eq!(html.matches("class=\"slide active\"").count(), 1);
        assert_eq!(html.matches("class=\"slide\"").count(), 1);
        let active = html.find("slide active").unwrap();
        let inactive = html.find("class=\"slide\"").unwrap();
        assert!(active < inactive);
    }

    #[test]
    fn test_rotation_zero_emits_no_transform() {
        let mut slide = Slide::new("a");
        slide.elements.push(Element {
            geometry: Geometry {
                x: 10.0,
                y: 20.0,
                width: 100.0,
                height: 50.0,
                rotation: 0.0,
            },
            kind: ElementKind::Unsupported,
        });
        let board = Board {
            width: None,
            height: None,
            slide_order: vec!["a".into()],
        };
        let html = render(&package_with(board, vec![slide], ResourceRegistry::new()));
        assert!(html.contains("left: 10px; top: 20px; width: 100px; height: 50px;"));
        assert!(!html.contains("transform: rotate"));
    }

    #[test]
    fn test_rotation_emits_transform() {
        let mut slide = Slide::new("a");
        slide.elements.push(Element {
            geometry: Geometry {
                rotation: 45.0,
                ..Default::default()
            },
            kind: ElementKind::Unsupported,
        });
        let board = Board {
            width: None,
            height: None,
            slide_order: vec!["a".into()],
        };
        let html = render(&package_with(board, vec![slide], ResourceRegistry::new()));
        assert!(html.contains("transform: rotate(45deg);"));
    }

    #[test]
    fn test_unresolved_image_renders_no_content() {
        let mut slide = Slide::new("a");
        slide.elements.push(Element {
            geometry: Geometry::default(),
            kind: ElementKind::Image {
                source: "id://missing".into(),
            },
        });
        let board = Board {
            width: None,
            height: None,
            slide_order: vec!["a".into()],
        };
        let html = render(&package_with(board, vec![slide], ResourceRegistry::new()));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_resolved_image_and_background() {
        let mut registry = ResourceRegistry::new();
        registry.insert("r1", "Resources/img1.png");
        registry.insert("bg", "Resources/bg.jpg");

        let mut slide = Slide::new("a");
        slide.background = Some("id://bg".into());
        slide.elements.push(Element {
            geometry: Geometry::default(),
            kind: ElementKind::Image {
                source: "id://r1".into(),
            },
        });
        let board = Board {
            width: None,
            height: None,
            slide_order: vec!["a".into()],
        };
        let html = render(&package_with(board, vec![slide], registry));
        assert!(html.contains("background-image: url('Resources/bg.jpg');"));
        assert!(html.contains("<img src=\"Resources/img1.png\" draggable=\"false\">"));
    }

    #[test]
    fn test_activity_background_renders_alongside_text() {
        let mut registry = ResourceRegistry::new();
        registry.insert("bg", "Resources/card.png");

        let mut slide = Slide::new("a");
        slide.elements.push(Element {
            geometry: Geometry::default(),
            kind: ElementKind::Activity {
                text: RichText {
                    vertical: Default::default(),
                    lines: vec![TextLine {
                        alignment: Default::default(),
                        runs: vec![TextRun::new("card")],
                    }],
                },
                background: Some("id://bg".into()),
            },
        });
        let board = Board {
            width: None,
            height: None,
            slide_order: vec!["a".into()],
        };
        let html = render(&package_with(board, vec![slide], registry));
        assert!(html.contains("background-image: url('Resources/card.png'); background-size: 100% 100%;"));
        assert!(html.contains("<span>card</span>"));
    }

    #[test]
    fn test_metadata_panel_and_creator_link() {
        let package = package_with(Board::default(), Vec::new(), ResourceRegistry::new());
        let html = render(&package);
        assert!(html.contains("<tr><td>文档名称</td><td>Lecture</td></tr>"));
        assert!(html.contains("href=\"https://k.seewo.com/personalPage/ann\""));
        assert!(html.contains("<tr><td>创建时间</td><td>2021-01-01</td></tr>"));
        assert!(html.contains("<tr><td>上次修改时间</td><td>2021-02-02</td></tr>"));
    }

    #[test]
    fn test_title_override() {
        let package = package_with(Board::default(), Vec::new(), ResourceRegistry::new());
        let html = to_html(&package, &RenderOptions::new().with_title("Archive <1>"));
        assert!(html.contains("<title>Archive &lt;1&gt;</title>"));
        assert!(!html.contains("<title>Lecture</title>"));
    }

    #[test]
    fn test_keyboard_navigation_contract() {
        let package = package_with(Board::default(), Vec::new(), ResourceRegistry::new());
        let html = render(&package);
        for key in ["ArrowRight", "ArrowDown", "ArrowLeft", "ArrowUp", "' '"] {
            assert!(html.contains(key), "missing key binding {key}");
        }
        assert!(html.contains("currentSlide < slides.length - 1"));
        assert!(html.contains("currentSlide > 0"));
    }
}

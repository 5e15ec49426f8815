//! Fixed module templates and the render context that fills them.
//!
//! Every module is rendered from the same four role skeletons. The only
//! variable bytes in the output are the substitution slots; everything else
//! is a compile-time literal. Two template sets exist, one per
//! [`WiringStyle`]:
//!
//! - **shared** — participants are created bare and wired by property
//!   assignment inside the Router's `setupModule()`.
//! - **injected** — owned collaborators are passed through initialisers;
//!   only the weak back-references are assigned afterwards.
//!
//! ## Substitution slots
//!
//! | Slot | Example | Source |
//! |------|---------|--------|
//! | `{{PREFIX}}` | "Login" | User input |
//! | `{{AUTHOR}}` | "Jane Doe" | Identity provider |
//! | `{{YEAR}}` | "2026" | Startup clock |
//! | `{{MONTH}}` | "08" | Startup clock (zero-padded) |
//! | `{{DAY}}` | "07" | Startup clock (zero-padded) |
//! | `{{FILE_NAME}}` | "LoginRouter.swift" | Derived per role |
//!
//! The emitted payload is inert UIKit-flavoured source text. It is never
//! parsed or compiled by this tool.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{
    entities::{module_spec::ModuleSpec, module_structure::ModuleStructure},
    error::DomainError,
    value_objects::{AuthorIdentity, HeaderDate, Role, WiringStyle},
};

// ── Render context ────────────────────────────────────────────────────────────

/// Context for template rendering.
///
/// A value object containing every substitution slot's value. Immutable
/// after creation — transformations create new instances (see
/// [`Self::with_variable`]).
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the per-invocation context from resolved inputs.
    pub fn new(spec: &ModuleSpec, author: &AuthorIdentity, date: HeaderDate) -> Self {
        let mut vars = HashMap::new();

        vars.insert("PREFIX".to_string(), spec.prefix().to_string());
        vars.insert("AUTHOR".to_string(), author.as_str().to_string());
        vars.insert("YEAR".to_string(), date.year_str());
        vars.insert("MONTH".to_string(), date.month_str());
        vars.insert("DAY".to_string(), date.day_str());

        Self { variables: vars }
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Simple linear scan and replace — adequate for skeletons of this
    /// size. An unknown `{{TOKEN}}` is left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

// ── Fixed templates ───────────────────────────────────────────────────────────

/// Header comment block shared by all four files.
const HEADER: &str = "\
//
//  {{FILE_NAME}}
//  Vipergen
//
//  Created by {{AUTHOR}} on {{DAY}}.{{MONTH}}.{{YEAR}}.
//  Copyright \u{a9} {{YEAR}} {{AUTHOR}}. All rights reserved.
//";

const ROUTER_SHARED: &str = "\
import Foundation
import UIKit

class {{PREFIX}}Router: NSObject {

    weak var presenter: {{PREFIX}}Presenter?

    func setupModule() -> {{PREFIX}}ViewController {
        let view = {{PREFIX}}ViewController()
        let interactor = {{PREFIX}}Interactor()
        let presenter = {{PREFIX}}Presenter()
        let router = {{PREFIX}}Router()

        view.presenter = presenter

        presenter.interactor = interactor
        presenter.view = view
        presenter.router = router

        router.presenter = presenter
        interactor.presenter = presenter

        return view
    }
}
";

const PRESENTER_SHARED: &str = "\
import Foundation

protocol {{PREFIX}}PresenterInterface: AnyObject {}
protocol {{PREFIX}}PresenterOutput: AnyObject {}

class {{PREFIX}}Presenter: {{PREFIX}}PresenterOutput {

    weak var view: {{PREFIX}}ViewController?
    var router: {{PREFIX}}Router?
    var interactor: {{PREFIX}}Interactor?
}

extension {{PREFIX}}Presenter: {{PREFIX}}PresenterInterface {}
";

const INTERACTOR_SHARED: &str = "\
import Foundation

protocol {{PREFIX}}InteractorInput: AnyObject {}

class {{PREFIX}}Interactor: NSObject {

    weak var presenter: {{PREFIX}}Presenter?
}
";

const VIEW_CONTROLLER_SHARED: &str = "\
import Foundation
import UIKit

protocol {{PREFIX}}ViewControllerInterface: AnyObject {}

class {{PREFIX}}ViewController: UIViewController {

    var presenter: {{PREFIX}}Presenter?
}

extension {{PREFIX}}ViewController: {{PREFIX}}ViewControllerInterface {}
";

const ROUTER_INJECTED: &str = "\
import Foundation
import UIKit

class {{PREFIX}}Router: NSObject {

    weak var presenter: {{PREFIX}}Presenter?

    static func assembleModule() -> {{PREFIX}}ViewController {
        let router = {{PREFIX}}Router()
        let interactor = {{PREFIX}}Interactor()
        let presenter = {{PREFIX}}Presenter(interactor: interactor, router: router)
        let view = {{PREFIX}}ViewController(presenter: presenter)

        presenter.view = view
        router.presenter = presenter
        interactor.presenter = presenter

        return view
    }
}
";

const PRESENTER_INJECTED: &str = "\
import Foundation

protocol {{PREFIX}}PresenterInterface: AnyObject {}
protocol {{PREFIX}}PresenterOutput: AnyObject {}

class {{PREFIX}}Presenter: {{PREFIX}}PresenterOutput {

    weak var view: {{PREFIX}}ViewController?
    let router: {{PREFIX}}Router
    let interactor: {{PREFIX}}Interactor

    init(interactor: {{PREFIX}}Interactor, router: {{PREFIX}}Router) {
        self.interactor = interactor
        self.router = router
    }
}

extension {{PREFIX}}Presenter: {{PREFIX}}PresenterInterface {}
";

const VIEW_CONTROLLER_INJECTED: &str = "\
import Foundation
import UIKit

protocol {{PREFIX}}ViewControllerInterface: AnyObject {}

class {{PREFIX}}ViewController: UIViewController {

    let presenter: {{PREFIX}}Presenter

    init(presenter: {{PREFIX}}Presenter) {
        self.presenter = presenter
        super.init(nibName: nil, bundle: nil)
    }

    required init?(coder: NSCoder) {
        fatalError(\"init(coder:) has not been implemented\")
    }
}

extension {{PREFIX}}ViewController: {{PREFIX}}ViewControllerInterface {}
";

/// Skeleton body for a role under a wiring style.
///
/// The Interactor holds only a weak back-reference in both styles, so the
/// shared skeleton is reused there.
pub fn role_body(style: WiringStyle, role: Role) -> &'static str {
    match (style, role) {
        (WiringStyle::Shared, Role::Router) => ROUTER_SHARED,
        (WiringStyle::Shared, Role::Presenter) => PRESENTER_SHARED,
        (WiringStyle::Shared, Role::Interactor) => INTERACTOR_SHARED,
        (WiringStyle::Shared, Role::ViewController) => VIEW_CONTROLLER_SHARED,
        (WiringStyle::Injected, Role::Router) => ROUTER_INJECTED,
        (WiringStyle::Injected, Role::Presenter) => PRESENTER_INJECTED,
        (WiringStyle::Injected, Role::Interactor) => INTERACTOR_SHARED,
        (WiringStyle::Injected, Role::ViewController) => VIEW_CONTROLLER_INJECTED,
    }
}

// ── Module rendering ──────────────────────────────────────────────────────────

/// Render the four role files for one module.
///
/// Pure: consumes resolved inputs, produces a validated [`ModuleStructure`]
/// rooted at `output_root/<module name>`. No I/O happens here.
pub fn render_module(
    spec: &ModuleSpec,
    author: &AuthorIdentity,
    date: HeaderDate,
    style: WiringStyle,
    output_root: &Path,
) -> Result<ModuleStructure, DomainError> {
    let ctx = RenderContext::new(spec, author, date);
    let mut structure = ModuleStructure::new(output_root.join(spec.name()));

    for role in Role::ALL {
        let file_name = role.file_name(spec.prefix());
        let ctx = ctx.clone().with_variable("FILE_NAME", file_name.as_str());

        let contents = format!(
            "{}\n\n{}",
            ctx.render(HEADER),
            ctx.render(role_body(style, role))
        );

        structure.add_file(file_name, contents);
    }

    structure.validate()?;
    Ok(structure)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn login_spec() -> ModuleSpec {
        ModuleSpec::new("Login", "Login").unwrap()
    }

    fn render(style: WiringStyle) -> ModuleStructure {
        render_module(
            &login_spec(),
            &AuthorIdentity::new("Jane Doe"),
            HeaderDate::new(2026, 8, 7),
            style,
            Path::new("."),
        )
        .unwrap()
    }

    #[test]
    fn renders_four_files_with_prefixed_names() {
        let structure = render(WiringStyle::Shared);
        assert_eq!(structure.file_count(), 4);

        let names: Vec<String> = structure
            .files()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "LoginRouter.swift",
                "LoginPresenter.swift",
                "LoginInteractor.swift",
                "LoginViewController.swift",
            ]
        );
    }

    #[test]
    fn root_is_module_directory_under_output_root() {
        let structure = render(WiringStyle::Shared);
        assert_eq!(structure.root(), PathBuf::from("./Login"));
    }

    #[test]
    fn no_residual_placeholders() {
        for style in [WiringStyle::Shared, WiringStyle::Injected] {
            let structure = render(style);
            for file in structure.files() {
                assert!(
                    !file.contents.contains("{{"),
                    "placeholder left in {}: {}",
                    file.path.display(),
                    file.contents
                );
            }
        }
    }

    #[test]
    fn header_embeds_author_and_padded_date() {
        let structure = render(WiringStyle::Shared);
        for file in structure.files() {
            assert!(file.contents.contains("Created by Jane Doe on 07.08.2026."));
            assert!(file.contents.contains("Copyright \u{a9} 2026 Jane Doe."));
        }
    }

    #[test]
    fn header_names_the_file() {
        let structure = render(WiringStyle::Shared);
        let router = structure.files().next().unwrap();
        assert!(router.contents.contains("//  LoginRouter.swift"));
    }

    #[test]
    fn shared_router_wires_and_returns_the_view() {
        let structure = render(WiringStyle::Shared);
        let router = structure.files().next().unwrap();

        assert!(router.contents.contains("class LoginRouter"));
        assert!(router.contents.contains("func setupModule() -> LoginViewController"));
        // wire-up references all three other role types
        assert!(router.contents.contains("LoginPresenter"));
        assert!(router.contents.contains("LoginInteractor"));
        assert!(router.contents.contains("LoginViewController"));
        assert!(router.contents.contains("return view"));
    }

    #[test]
    fn injected_router_passes_collaborators_through_initialisers() {
        let structure = render(WiringStyle::Injected);
        let router = structure.files().next().unwrap();

        assert!(router.contents.contains("assembleModule"));
        assert!(router.contents.contains("LoginPresenter(interactor: interactor, router: router)"));
        assert!(router.contents.contains("LoginViewController(presenter: presenter)"));
    }

    #[test]
    fn injected_presenter_has_initialiser() {
        let structure = render(WiringStyle::Injected);
        let presenter = structure.files().nth(1).unwrap();
        assert!(presenter.contents.contains("init(interactor: LoginInteractor, router: LoginRouter)"));
    }

    #[test]
    fn interactor_identical_across_styles() {
        assert_eq!(
            role_body(WiringStyle::Shared, Role::Interactor),
            role_body(WiringStyle::Injected, Role::Interactor)
        );
    }

    #[test]
    fn fallback_author_appears_in_headers() {
        let structure = render_module(
            &login_spec(),
            &AuthorIdentity::fallback(),
            HeaderDate::new(2026, 1, 2),
            WiringStyle::Shared,
            Path::new("."),
        )
        .unwrap();

        for file in structure.files() {
            assert!(file.contents.contains("Created by VIPERGEN on 02.01.2026."));
        }
    }

    #[test]
    fn unknown_placeholder_is_left_as_is() {
        let ctx = RenderContext::new(
            &login_spec(),
            &AuthorIdentity::fallback(),
            HeaderDate::new(2026, 1, 1),
        );
        assert_eq!(ctx.render("{{UNKNOWN}} {{PREFIX}}"), "{{UNKNOWN}} Login");
    }
}

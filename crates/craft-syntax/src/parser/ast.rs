//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; accessors return `None` where
//! recovery left a piece out.

use std::iter::successors;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Sum kinds have no node of their own: the enum casts whichever alternative is present.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($node:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($node),)+
        }

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$node => $node::cast(node).map($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(n) => n.as_cst(),)+
                }
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(ArchBlock, ArchBlock);
ast_node!(ArchContinuation, ArchContinuation);
ast_node!(PresentationSection, PresentationSection);
ast_node!(GatewaySection, GatewaySection);
ast_node!(ArchComponentList, ArchComponentList);
ast_node!(ComponentFlow, ComponentFlow);
ast_node!(SimpleComponent, SimpleComponent);
ast_node!(ComponentWithModifiers, ComponentWithModifiers);
ast_node!(Modifier, Modifier);
ast_node!(Boolean, Boolean);
ast_node!(ServicesBlock, ServicesBlock);
ast_node!(ServiceBlock, ServiceBlock);
ast_node!(ServiceDefinition, ServiceDefinition);
ast_node!(DomainsProperty, DomainsProperty);
ast_node!(LanguageProperty, LanguageProperty);
ast_node!(DataStoresProperty, DataStoresProperty);
ast_node!(DeploymentProperty, DeploymentProperty);
ast_node!(DeploymentSpec, DeploymentSpec);
ast_node!(DeploymentRule, DeploymentRule);
ast_node!(DomainBlock, DomainBlock);
ast_node!(DomainsBlock, DomainsBlock);
ast_node!(DomainDefinition, DomainDefinition);
ast_node!(ActorBlock, ActorBlock);
ast_node!(ActorsBlock, ActorsBlock);
ast_node!(ActorDefinition, ActorDefinition);
ast_node!(ExposureBlock, ExposureBlock);
ast_node!(ToProperty, ToProperty);
ast_node!(ThroughProperty, ThroughProperty);
ast_node!(OfProperty, OfProperty);
ast_node!(UseCaseBlock, UseCaseBlock);
ast_node!(Scenario, Scenario);
ast_node!(ScenarioContinuation, ScenarioContinuation);
ast_node!(WhenClause, WhenClause);
ast_node!(ExternalTrigger, ExternalTrigger);
ast_node!(EventTrigger, EventTrigger);
ast_node!(DomainListener, DomainListener);
ast_node!(CronTrigger, CronTrigger);
ast_node!(SyncAction, SyncAction);
ast_node!(AsyncAction, AsyncAction);
ast_node!(InternalAction, InternalAction);
ast_node!(ReturnAction, ReturnAction);
ast_node!(Phrase, Phrase);

ast_enum!(
    /// Top-level item.
    Item {
        Arch(ArchBlock),
        Services(ServicesBlock),
        Service(ServiceBlock),
        Domain(DomainBlock),
        Domains(DomainsBlock),
        Actors(ActorsBlock),
        Actor(ActorBlock),
        Exposure(ExposureBlock),
        UseCase(UseCaseBlock),
    }
);

ast_enum!(ArchSection {
    Presentation(PresentationSection),
    Gateway(GatewaySection),
});

ast_enum!(ArchComponent {
    Simple(SimpleComponent),
    Flow(ComponentFlow),
});

ast_enum!(ServiceProperty {
    Domains(DomainsProperty),
    Language(LanguageProperty),
    DataStores(DataStoresProperty),
    Deployment(DeploymentProperty),
});

ast_enum!(ExposureProperty {
    To(ToProperty),
    Through(ThroughProperty),
    Of(OfProperty),
});

ast_enum!(Trigger {
    External(ExternalTrigger),
    Event(EventTrigger),
    Listener(DomainListener),
    Cron(CronTrigger),
});

ast_enum!(Action {
    Sync(SyncAction),
    Async(AsyncAction),
    Internal(InternalAction),
    Return(ReturnAction),
});

/// Value of a component modifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModifierValue {
    Identifier(SyntaxToken),
    Number(SyntaxToken),
    Boolean(Boolean),
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

/// Identifier token directly owned by `node`, or by its child wrapper of `wrapper` kind.
fn ident(node: &SyntaxNode, wrapper: Option<SyntaxKind>) -> Option<SyntaxToken> {
    match wrapper {
        None => token(node, SyntaxKind::Id),
        Some(kind) => node
            .children()
            .find(|n| n.kind() == kind)
            .and_then(|n| token(&n, SyntaxKind::Id)),
    }
}

/// Identifiers of an `identifier_list` child.
fn identifier_list(node: &SyntaxNode) -> Vec<SyntaxToken> {
    node.children()
        .find(|n| n.kind() == SyntaxKind::IdentifierList)
        .map(|list| {
            list.children_with_tokens()
                .filter_map(|it| it.into_token())
                .filter(|t| t.kind() == SyntaxKind::Id)
                .collect()
        })
        .unwrap_or_default()
}

/// The connector word right under `node`, if it took one.
fn connector(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children()
        .find(|n| n.kind() == SyntaxKind::ConnectorWord)
        .and_then(|n| n.first_token())
}

impl SourceFile {
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }
}

impl ArchBlock {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }

    /// The first section; later ones hang off its continuations.
    pub fn section(&self) -> Option<ArchSection> {
        self.0.children().find_map(ArchSection::cast)
    }

    /// Every section of the block, in source order.
    pub fn sections(&self) -> impl Iterator<Item = ArchSection> {
        successors(self.section(), ArchSection::next_section)
    }
}

impl ArchSection {
    pub fn component_list(&self) -> Option<ArchComponentList> {
        self.as_cst().children().find_map(ArchComponentList::cast)
    }

    /// Components of this section, up to the next section.
    pub fn components(&self) -> impl Iterator<Item = ArchComponent> {
        self.lists().filter_map(|list| list.component())
    }

    pub fn next_section(&self) -> Option<ArchSection> {
        self.lists().last()?.continuation()?.section()
    }

    fn lists(&self) -> impl Iterator<Item = ArchComponentList> {
        successors(self.component_list(), |list| {
            list.continuation()?.component_list()
        })
    }
}

impl ArchComponentList {
    pub fn component(&self) -> Option<ArchComponent> {
        self.0.children().find_map(ArchComponent::cast)
    }

    pub fn continuation(&self) -> Option<ArchContinuation> {
        self.0.children().find_map(ArchContinuation::cast)
    }
}

impl ArchContinuation {
    pub fn section(&self) -> Option<ArchSection> {
        self.0.children().find_map(ArchSection::cast)
    }

    pub fn component_list(&self) -> Option<ArchComponentList> {
        self.0.children().find_map(ArchComponentList::cast)
    }
}

impl ArchComponent {
    /// One component for a simple component, the whole chain for a flow.
    pub fn components(&self) -> Vec<ComponentWithModifiers> {
        self.as_cst()
            .children()
            .filter_map(ComponentWithModifiers::cast)
            .collect()
    }
}

impl ComponentWithModifiers {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::ComponentName))
    }

    pub fn modifiers(&self) -> impl Iterator<Item = Modifier> {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::ComponentModifiers)
            .flat_map(|n| n.children())
            .filter(|n| n.kind() == SyntaxKind::ModifierList)
            .flat_map(|n| n.children())
            .filter_map(Modifier::cast)
    }
}

impl Modifier {
    pub fn key(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::ModifierKey))
    }

    pub fn value(&self) -> Option<ModifierValue> {
        if let Some(boolean) = self.0.children().find_map(Boolean::cast) {
            return Some(ModifierValue::Boolean(boolean));
        }
        if let Some(number) = token(&self.0, SyntaxKind::Number) {
            return Some(ModifierValue::Number(number));
        }
        token(&self.0, SyntaxKind::Id).map(ModifierValue::Identifier)
    }
}

impl Boolean {
    pub fn value(&self) -> bool {
        token(&self.0, SyntaxKind::KwTrue).is_some()
    }
}

impl ServicesBlock {
    pub fn definitions(&self) -> impl Iterator<Item = ServiceDefinition> + '_ {
        self.0.children().filter_map(ServiceDefinition::cast)
    }
}

impl ServiceBlock {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }

    pub fn properties(&self) -> impl Iterator<Item = ServiceProperty> + '_ {
        self.0.children().filter_map(ServiceProperty::cast)
    }
}

impl ServiceDefinition {
    /// Either a string or an identifier token.
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::Str | SyntaxKind::Id))
    }

    pub fn properties(&self) -> impl Iterator<Item = ServiceProperty> + '_ {
        self.0.children().filter_map(ServiceProperty::cast)
    }
}

impl DomainsProperty {
    pub fn domains(&self) -> Vec<SyntaxToken> {
        identifier_list(&self.0)
    }
}

impl LanguageProperty {
    pub fn language(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }
}

impl DataStoresProperty {
    pub fn stores(&self) -> Vec<SyntaxToken> {
        identifier_list(&self.0)
    }
}

impl DeploymentProperty {
    pub fn spec(&self) -> Option<DeploymentSpec> {
        self.0.children().find_map(DeploymentSpec::cast)
    }
}

impl DeploymentSpec {
    /// `canary`, `blue_green` or `rolling`.
    pub fn strategy(&self) -> Option<SyntaxToken> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::DeploymentType)
            .and_then(|n| n.first_token())
    }

    pub fn rules(&self) -> impl Iterator<Item = DeploymentRule> {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::DeploymentRules)
            .flat_map(|n| n.children())
            .filter_map(DeploymentRule::cast)
    }
}

impl DeploymentRule {
    pub fn percentage(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Percentage)
    }

    pub fn target(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }
}

fn subdomains(node: &SyntaxNode) -> Vec<SyntaxToken> {
    node.children()
        .filter(|n| n.kind() == SyntaxKind::Subdomain)
        .filter_map(|n| token(&n, SyntaxKind::Id))
        .collect()
}

impl DomainBlock {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }

    pub fn subdomains(&self) -> Vec<SyntaxToken> {
        subdomains(&self.0)
    }
}

impl DomainsBlock {
    pub fn definitions(&self) -> impl Iterator<Item = DomainDefinition> + '_ {
        self.0.children().filter_map(DomainDefinition::cast)
    }
}

impl DomainDefinition {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }

    pub fn subdomains(&self) -> Vec<SyntaxToken> {
        subdomains(&self.0)
    }
}

fn actor_type(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children()
        .find(|n| n.kind() == SyntaxKind::ActorType)
        .and_then(|n| n.first_token())
}

impl ActorBlock {
    /// `user`, `system` or `service`.
    pub fn actor_type(&self) -> Option<SyntaxToken> {
        actor_type(&self.0)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::ActorName))
    }
}

impl ActorsBlock {
    pub fn definitions(&self) -> impl Iterator<Item = ActorDefinition> + '_ {
        self.0.children().filter_map(ActorDefinition::cast)
    }
}

impl ActorDefinition {
    pub fn actor_type(&self) -> Option<SyntaxToken> {
        actor_type(&self.0)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::ActorName))
    }
}

impl ExposureBlock {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }

    pub fn properties(&self) -> impl Iterator<Item = ExposureProperty> + '_ {
        self.0.children().filter_map(ExposureProperty::cast)
    }
}

impl ExposureProperty {
    pub fn names(&self) -> Vec<SyntaxToken> {
        identifier_list(self.as_cst())
    }
}

impl UseCaseBlock {
    /// The quoted name, quotes included.
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Str)
    }

    /// Every scenario of the use case, in source order.
    pub fn scenarios(&self) -> impl Iterator<Item = Scenario> {
        self.0.descendants().filter_map(Scenario::cast)
    }
}

impl Scenario {
    pub fn when_clause(&self) -> Option<WhenClause> {
        self.0.children().find_map(WhenClause::cast)
    }

    pub fn continuation(&self) -> Option<ScenarioContinuation> {
        self.0.children().find_map(ScenarioContinuation::cast)
    }

    /// Actions of the `when` clause followed by those after blank lines, up to the
    /// next scenario.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .when_clause()
            .map(|clause| clause.actions().collect())
            .unwrap_or_default();
        let continuations = successors(self.continuation(), |c| c.continuation());
        actions.extend(continuations.filter_map(|c| c.action()));
        actions
    }
}

impl ScenarioContinuation {
    pub fn scenario(&self) -> Option<Scenario> {
        self.0.children().find_map(Scenario::cast)
    }

    pub fn action(&self) -> Option<Action> {
        self.0.children().find_map(Action::cast)
    }

    pub fn continuation(&self) -> Option<ScenarioContinuation> {
        self.0.children().find_map(ScenarioContinuation::cast)
    }
}

impl WhenClause {
    pub fn trigger(&self) -> Option<Trigger> {
        self.0.children().find_map(Trigger::cast)
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.children().filter_map(Action::cast)
    }
}

impl ExternalTrigger {
    pub fn actor(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::TriggerActor))
    }

    pub fn verb(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::TriggerVerb))
    }

    pub fn connector(&self) -> Option<SyntaxToken> {
        connector(&self.0)
    }

    pub fn phrase(&self) -> Option<Phrase> {
        self.0.children().find_map(Phrase::cast)
    }
}

impl EventTrigger {
    pub fn event(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Str)
    }
}

impl DomainListener {
    pub fn domain(&self) -> Option<SyntaxToken> {
        ident(&self.0, None)
    }

    pub fn event(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Str)
    }
}

impl CronTrigger {
    pub fn schedule(&self) -> Option<Phrase> {
        self.0.children().find_map(Phrase::cast)
    }
}

impl Action {
    pub fn subject(&self) -> Option<SyntaxToken> {
        ident(self.as_cst(), Some(SyntaxKind::ActionSubject))
    }

    pub fn phrase(&self) -> Option<Phrase> {
        self.as_cst().children().find_map(Phrase::cast)
    }
}

impl SyncAction {
    pub fn target(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::ActionTarget))
    }

    pub fn connector(&self) -> Option<SyntaxToken> {
        connector(&self.0)
    }
}

impl AsyncAction {
    pub fn event(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Str)
    }
}

impl InternalAction {
    pub fn verb(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::ActionVerb))
    }

    pub fn connector(&self) -> Option<SyntaxToken> {
        connector(&self.0)
    }
}

impl ReturnAction {
    pub fn target(&self) -> Option<SyntaxToken> {
        ident(&self.0, Some(SyntaxKind::ActionTarget))
    }

    pub fn connector(&self) -> Option<SyntaxToken> {
        connector(&self.0)
    }
}

impl Phrase {
    /// Words and strings of the phrase, connectors included.
    pub fn words(&self) -> Vec<SyntaxToken> {
        self.0
            .descendants_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .collect()
    }

    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.words()
            .iter()
            .map(|t| t.text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

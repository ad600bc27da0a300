//! Syntax kinds for the Craft language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `CraftLang` implements Rowan's `Language` trait for tree construction.
//!
//! Every literal of the grammar that has the shape of an identifier gets its own keyword
//! kind. The parser re-tags keywords as `Id` wherever an identifier is expected, so
//! `to`, `service` or `CRON` remain usable as names.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("{")]
    BraceOpen = 0,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    /// Component chain separator
    #[token(">")]
    Gt,

    /// Deployment rule arrow: `10% -> canary`
    #[token("->")]
    Arrow,

    #[token("arch")]
    KwArch,
    #[token("presentation")]
    KwPresentation,
    #[token("gateway")]
    KwGateway,
    #[token("services")]
    KwServices,
    #[token("service")]
    KwService,
    #[token("domain")]
    KwDomain,
    #[token("domains")]
    KwDomains,
    #[token("language")]
    KwLanguage,
    #[token("data-stores")]
    KwDataStores,
    #[token("deployment")]
    KwDeployment,
    #[token("canary")]
    KwCanary,
    #[token("blue_green")]
    KwBlueGreen,
    #[token("rolling")]
    KwRolling,
    #[token("actor")]
    KwActor,
    #[token("actors")]
    KwActors,
    #[token("user")]
    KwUser,
    #[token("system")]
    KwSystem,
    #[token("exposure")]
    KwExposure,
    #[token("through")]
    KwThrough,
    #[token("use_case")]
    KwUseCase,
    #[token("when")]
    KwWhen,
    #[token("listens")]
    KwListens,
    #[token("CRON")]
    KwCron,
    #[token("asks")]
    KwAsks,
    #[token("notifies")]
    KwNotifies,
    #[token("returns")]
    KwReturns,
    #[token("true")]
    KwTrue,
    #[token("false")]
    KwFalse,

    // Connector words
    #[token("a", priority = 3)]
    KwA,
    #[token("an")]
    KwAn,
    #[token("the")]
    KwThe,
    #[token("as")]
    KwAs,
    #[token("to")]
    KwTo,
    #[token("from")]
    KwFrom,
    #[token("in")]
    KwIn,
    #[token("on")]
    KwOn,
    #[token("at")]
    KwAt,
    #[token("for")]
    KwFor,
    #[token("with")]
    KwWith,
    #[token("by")]
    KwBy,
    #[token("of")]
    KwOf,

    /// Identifier. Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*")]
    Id,

    #[regex(r#""(?:[^"\\]|\\(?:.|\n))*""#)]
    Str,

    /// String running to end of input without a closing quote
    #[regex(r#""(?:[^"\\]|\\(?:.|\n))*\\?"#, allow_greedy = true)]
    UnterminatedStr,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[0-9]+%")]
    Percentage,

    #[regex(r"[ \t]+")]
    Whitespace,

    /// Statement separator; significant, never trivia.
    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Block comment running to end of input without `*/`
    #[regex(r"/\*(?:[^*]|\*+[^*/])*\**", allow_greedy = true)]
    UnterminatedComment,

    /// One unrecognized character
    Garbage,

    /// Sentinel returned by lookahead past the end of input
    Eof,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    ArchBlock,
    ArchContinuation,
    PresentationSection,
    GatewaySection,
    ArchComponentList,
    ComponentFlow,
    ComponentWithModifiers,
    ComponentName,
    ComponentModifiers,
    ModifierList,
    Modifier,
    ModifierKey,
    SimpleComponent,
    ServicesBlock,
    ServiceBlock,
    ServiceDefinition,
    DomainsProperty,
    LanguageProperty,
    DataStoresProperty,
    DeploymentProperty,
    DeploymentSpec,
    DeploymentType,
    DeploymentRules,
    DeploymentRule,
    DomainBlock,
    DomainsBlock,
    DomainDefinition,
    Subdomain,
    ActorBlock,
    ActorsBlock,
    ActorDefinition,
    ActorType,
    ActorName,
    ExposureBlock,
    ToProperty,
    ThroughProperty,
    OfProperty,
    UseCaseBlock,
    ScenarioContinuation,
    Scenario,
    WhenClause,
    ExternalTrigger,
    TriggerActor,
    TriggerVerb,
    EventTrigger,
    DomainListener,
    CronTrigger,
    SyncAction,
    AsyncAction,
    InternalAction,
    ReturnAction,
    ActionSubject,
    ActionTarget,
    ActionVerb,
    ConnectorWord,
    Phrase,
    IdentifierList,
    Boolean,
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

/// Coarse token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Identifier,
    String,
    Number,
    Percentage,
    Boolean,
    Keyword,
    Punctuation,
    Comment,
    Newline,
    Whitespace,
    Error,
}

impl SyntaxKind {
    /// Comments and horizontal whitespace. Newlines are significant.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Error | Garbage | UnterminatedStr | UnterminatedComment
        )
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (SourceFile as u16)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwArch as u16..=KwOf as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_connector(self) -> bool {
        CONNECTORS.contains(self)
    }

    /// Identifiers and keywords: anything usable where a name is expected.
    #[inline]
    pub fn is_word(self) -> bool {
        self == Id || self.is_keyword()
    }

    /// Tokens with no node of their own in the tree view.
    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, Whitespace | Newline | Eof)
    }

    /// Named kinds correspond to grammar rules (including token rules and `ERROR`).
    pub fn is_named(self) -> bool {
        match self {
            Id | Str | Number | Percentage | LineComment | BlockComment => true,
            kind if kind.is_error() => true,
            kind => !kind.is_token() && kind != __LAST,
        }
    }

    pub fn category(self) -> TokenCategory {
        match self {
            Id => TokenCategory::Identifier,
            Str => TokenCategory::String,
            Number => TokenCategory::Number,
            Percentage => TokenCategory::Percentage,
            KwTrue | KwFalse => TokenCategory::Boolean,
            kind if kind.is_keyword() => TokenCategory::Keyword,
            LineComment | BlockComment => TokenCategory::Comment,
            Newline => TokenCategory::Newline,
            Whitespace => TokenCategory::Whitespace,
            BraceOpen | BraceClose | BracketOpen | BracketClose | ParenOpen | ParenClose
            | Colon | Comma | Gt | Arrow => TokenCategory::Punctuation,
            _ => TokenCategory::Error,
        }
    }

    /// Tree-sitter style kind name: the rule name for named kinds, the literal for
    /// anonymous tokens.
    pub fn name(self) -> &'static str {
        match self {
            BraceOpen => "{",
            BraceClose => "}",
            BracketOpen => "[",
            BracketClose => "]",
            ParenOpen => "(",
            ParenClose => ")",
            Colon => ":",
            Comma => ",",
            Gt => ">",
            Arrow => "->",
            KwArch => "arch",
            KwPresentation => "presentation",
            KwGateway => "gateway",
            KwServices => "services",
            KwService => "service",
            KwDomain => "domain",
            KwDomains => "domains",
            KwLanguage => "language",
            KwDataStores => "data-stores",
            KwDeployment => "deployment",
            KwCanary => "canary",
            KwBlueGreen => "blue_green",
            KwRolling => "rolling",
            KwActor => "actor",
            KwActors => "actors",
            KwUser => "user",
            KwSystem => "system",
            KwExposure => "exposure",
            KwThrough => "through",
            KwUseCase => "use_case",
            KwWhen => "when",
            KwListens => "listens",
            KwCron => "CRON",
            KwAsks => "asks",
            KwNotifies => "notifies",
            KwReturns => "returns",
            KwTrue => "true",
            KwFalse => "false",
            KwA => "a",
            KwAn => "an",
            KwThe => "the",
            KwAs => "as",
            KwTo => "to",
            KwFrom => "from",
            KwIn => "in",
            KwOn => "on",
            KwAt => "at",
            KwFor => "for",
            KwWith => "with",
            KwBy => "by",
            KwOf => "of",
            Id => "identifier",
            Str => "string",
            Number => "number",
            Percentage => "percentage",
            Whitespace => "whitespace",
            Newline => "newline",
            LineComment | BlockComment => "comment",
            UnterminatedStr | UnterminatedComment | Garbage | Error => "ERROR",
            Eof => "end",
            SourceFile => "source_file",
            ArchBlock => "arch_block",
            ArchContinuation => "arch_continuation",
            PresentationSection => "presentation_section",
            GatewaySection => "gateway_section",
            ArchComponentList => "arch_component_list",
            ComponentFlow => "component_flow",
            ComponentWithModifiers => "component_with_modifiers",
            ComponentName => "component_name",
            ComponentModifiers => "component_modifiers",
            ModifierList => "modifier_list",
            Modifier => "modifier",
            ModifierKey => "modifier_key",
            SimpleComponent => "simple_component",
            ServicesBlock => "services_block",
            ServiceBlock => "service_block",
            ServiceDefinition => "service_definition",
            DomainsProperty => "domains_property",
            LanguageProperty => "language_property",
            DataStoresProperty => "data_stores_property",
            DeploymentProperty => "deployment_property",
            DeploymentSpec => "deployment_spec",
            DeploymentType => "deployment_type",
            DeploymentRules => "deployment_rules",
            DeploymentRule => "deployment_rule",
            DomainBlock => "domain_block",
            DomainsBlock => "domains_block",
            DomainDefinition => "domain_definition",
            Subdomain => "subdomain",
            ActorBlock => "actor_block",
            ActorsBlock => "actors_block",
            ActorDefinition => "actor_definition",
            ActorType => "actor_type",
            ActorName => "actor_name",
            ExposureBlock => "exposure_block",
            ToProperty => "to_property",
            ThroughProperty => "through_property",
            OfProperty => "of_property",
            UseCaseBlock => "use_case_block",
            ScenarioContinuation => "scenario_continuation",
            Scenario => "scenario",
            WhenClause => "when_clause",
            ExternalTrigger => "external_trigger",
            TriggerActor => "trigger_actor",
            TriggerVerb => "trigger_verb",
            EventTrigger => "event_trigger",
            DomainListener => "domain_listener",
            CronTrigger => "cron_trigger",
            SyncAction => "sync_action",
            AsyncAction => "async_action",
            InternalAction => "internal_action",
            ReturnAction => "return_action",
            ActionSubject => "action_subject",
            ActionTarget => "action_target",
            ActionVerb => "action_verb",
            ConnectorWord => "connector_word",
            Phrase => "phrase",
            IdentifierList => "identifier_list",
            Boolean => "boolean",
            __LAST => "__LAST",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CraftLang {}

impl Language for CraftLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<CraftLang>;
pub type SyntaxToken = rowan::SyntaxToken<CraftLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..128u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Connector words: articles and prepositions that glue phrases together.
pub const CONNECTORS: TokenSet = TokenSet::new(&[
    KwA, KwAn, KwThe, KwAs, KwTo, KwFrom, KwIn, KwOn, KwAt, KwFor, KwWith, KwBy, KwOf,
]);

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const KEYWORDS: TokenSet = TokenSet::new(&[
        KwArch,
        KwPresentation,
        KwGateway,
        KwServices,
        KwService,
        KwDomain,
        KwDomains,
        KwLanguage,
        KwDataStores,
        KwDeployment,
        KwCanary,
        KwBlueGreen,
        KwRolling,
        KwActor,
        KwActors,
        KwUser,
        KwSystem,
        KwExposure,
        KwThrough,
        KwUseCase,
        KwWhen,
        KwListens,
        KwCron,
        KwAsks,
        KwNotifies,
        KwReturns,
        KwTrue,
        KwFalse,
    ])
    .union(CONNECTORS);

    /// Anything usable as an identifier.
    pub const WORDS: TokenSet = KEYWORDS.union(TokenSet::single(Id));

    /// FIRST set of a phrase: words (connectors included) and strings.
    pub const PHRASE_FIRST: TokenSet = WORDS.union(TokenSet::single(Str));

    /// Leading keywords of top-level items.
    pub const ITEM_FIRST: TokenSet = TokenSet::new(&[
        KwArch, KwServices, KwService, KwDomain, KwDomains, KwActors, KwActor, KwExposure,
        KwUseCase,
    ]);

    pub const ARCH_SECTION_FIRST: TokenSet = TokenSet::new(&[KwPresentation, KwGateway]);

    pub const SERVICE_PROPERTY_FIRST: TokenSet =
        TokenSet::new(&[KwDomains, KwLanguage, KwDataStores, KwDeployment]);

    pub const EXPOSURE_PROPERTY_FIRST: TokenSet = TokenSet::new(&[KwTo, KwThrough, KwOf]);

    pub const DEPLOYMENT_TYPES: TokenSet = TokenSet::new(&[KwCanary, KwBlueGreen, KwRolling]);

    pub const ACTOR_TYPES: TokenSet = TokenSet::new(&[KwUser, KwSystem, KwService]);

    pub const BOOLEANS: TokenSet = TokenSet::new(&[KwTrue, KwFalse]);
}

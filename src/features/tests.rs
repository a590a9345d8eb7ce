use crate::data::{LabeledSentence, SentenceInstance};
use crate::digraph::DirectedGraph;
use crate::engine::{GeneratorConfig, TypeConstraints};
use crate::error::FeatureError;
use crate::features::GlobalFeatureGenerator;
use crate::types::{Alphabets, Mention, SentenceAssignment, Span, Token};

struct Fixture {
    config: GeneratorConfig,
    constraints: TypeConstraints,
    alphabets: Alphabets,
}

impl Fixture {
    fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            constraints: TypeConstraints::ace2005().unwrap(),
            alphabets: Alphabets::new(),
        }
    }

    fn generator(&self) -> GlobalFeatureGenerator<'_> {
        GlobalFeatureGenerator::new(&self.config, &self.constraints, &self.alphabets)
    }

    fn assignment(&self, inst: &SentenceInstance, triggers: &[(usize, &str)]) -> SentenceAssignment {
        let mut assn = SentenceAssignment::empty(inst.len(), &self.alphabets, "O");
        for &(index, label) in triggers {
            assn.assign_trigger(&self.alphabets, index, label).unwrap();
        }
        assn
    }

    /// Give every candidate a role under `trigger`, `NON` where none is listed
    fn roles(&self, assn: &mut SentenceAssignment, inst: &SentenceInstance, trigger: usize, roles: &[(usize, &str)]) {
        for entity in 0..inst.mention_count() {
            let role = roles
                .iter()
                .find(|(e, _)| *e == entity)
                .map_or("NON", |&(_, role)| role);
            assn.assign_role(&self.alphabets, trigger, entity, role).unwrap();
        }
    }
}

fn tokens(words: &[(&str, &str)]) -> Vec<Token> {
    words.iter().map(|(text, pos)| Token::new(*text, *pos)).collect()
}

fn entity(start: usize, end: usize, parent: &str) -> Mention {
    Mention::entity(Span::new(start, end), Span::new(end - 1, end), "PER").with_parent(parent)
}

fn with_prefix<'f>(features: &'f [String], prefix: &str) -> Vec<&'f str> {
    features
        .iter()
        .filter(|f| f.starts_with(prefix))
        .map(String::as_str)
        .collect()
}

/// John was fired yesterday
fn fired_sentence() -> SentenceInstance {
    let mut graph = DirectedGraph::with_nodes(4);
    graph.add_edge(2, 0, "nsubjpass");
    graph.add_edge(2, 1, "auxpass");
    graph.add_edge(2, 3, "tmod");
    SentenceInstance::new(
        "fired",
        tokens(&[("John", "NNP"), ("was", "VBD"), ("fired", "VBN"), ("yesterday", "NN")]),
        vec![entity(0, 1, "E1"), Mention::time(Span::new(3, 4))],
        Some(graph),
    )
    .unwrap()
}

/// Soldiers attacked the town and they killed civilians
fn attack_sentence(connected: bool) -> SentenceInstance {
    let mut graph = DirectedGraph::with_nodes(8);
    graph.add_edge(1, 0, "nsubj");
    graph.add_edge(1, 3, "dobj");
    graph.add_edge(3, 2, "det");
    graph.add_edge(1, 4, "cc");
    graph.add_edge(6, 5, "nsubj");
    graph.add_edge(6, 7, "dobj");
    if connected {
        graph.add_edge(1, 6, "conj");
    }
    SentenceInstance::new(
        "attack",
        tokens(&[
            ("Soldiers", "NNS"),
            ("attacked", "VBD"),
            ("the", "DT"),
            ("town", "NN"),
            ("and", "CC"),
            ("they", "PRP"),
            ("killed", "VBD"),
            ("civilians", "NNS"),
        ]),
        vec![
            entity(0, 1, "E1"),
            Mention::entity(Span::new(2, 4), Span::new(3, 4), "GPE").with_parent("E2"),
            entity(5, 6, "E1"),
            entity(7, 8, "E3"),
        ],
        Some(graph),
    )
    .unwrap()
}

#[test]
fn test_single_trigger_scenario() {
    let fx = Fixture::new();
    let inst = fired_sentence();
    let mut assn = fx.assignment(&inst, &[(2, "End-Position")]);
    fx.roles(&mut assn, &inst, 2, &[(0, "Person"), (1, "Time-Within")]);

    let features = fx.generator().token_features(&inst, &assn, 2).unwrap();
    assert!(with_prefix(&features, "triggerPair").is_empty());
    assert!(features.contains(&"roleNum:End-Position#Person#1".to_string()));
    assert!(features.contains(&"roleNum:End-Position#Time#1".to_string()));
    assert!(features.contains(&"roleNum:End-Position#Place#0".to_string()));
    assert!(with_prefix(&features, "timeArgPair=").is_empty());
    assert!(with_prefix(&features, "same_").is_empty());
}

#[test]
fn test_role_count_bucketing() {
    let fx = Fixture::new();
    let words: Vec<(&str, &str)> = vec![("x", "NN"); 12];
    let mentions = (0..10)
        .map(|i| Mention::entity(Span::token(i), Span::token(i), "PER"))
        .collect();
    let inst = SentenceInstance::new("many", tokens(&words), mentions, None).unwrap();
    let mut assn = fx.assignment(&inst, &[(11, "Die")]);
    let mut roles = vec![(0, "Victim"), (1, "Victim"), (2, "Victim"), (3, "Victim"), (4, "Victim")];
    roles.extend([(5, "Agent"), (6, "Agent"), (7, "Agent")]);
    roles.extend([(8, "Time-Within"), (9, "Time-Before")]);
    fx.roles(&mut assn, &inst, 11, &roles);

    let features = fx.generator().node_completion_features(&inst, &assn, 11).unwrap();
    assert!(features.contains(&"roleNum:Die#Victim#4".to_string()));
    assert!(features.contains(&"roleNum:Die#Agent#3".to_string()));
    assert!(features.contains(&"roleNum:Die#Time#2".to_string()));
    assert!(features.contains(&"roleNum:Die#Instrument#0".to_string()));
    assert_eq!(
        with_prefix(&features, "timeArgPair="),
        vec!["timeArgPair=Time-Before#Time-Within"]
    );
    for feature in with_prefix(&features, "roleNum:") {
        let count: usize = feature.rsplit('#').next().unwrap().parse().unwrap();
        assert!(count <= 4);
    }
}

#[test]
fn test_unknown_trigger_label_fails() {
    let fx = Fixture::new();
    let inst = fired_sentence();
    let mut assn = fx.assignment(&inst, &[(2, "Get-Fired")]);
    fx.roles(&mut assn, &inst, 2, &[(0, "Person")]);

    let err = fx.generator().node_completion_features(&inst, &assn, 2).unwrap_err();
    assert!(matches!(err, FeatureError::UnknownTriggerLabel(label) if label == "Get-Fired"));
}

#[test]
fn test_trigger_pairs() {
    let fx = Fixture::new();
    let inst = attack_sentence(true);
    let assn = fx.assignment(&inst, &[(1, "Attack"), (6, "Die")]);

    let features = fx.generator().trigger_pair_features(&inst, &assn, 6).unwrap();
    assert_eq!(
        features,
        vec![
            "triggerPairSameClause=Attack#Die#false",
            "triggerPairDepPath=Attack#Die#conj",
            "triggerPair=Attack#Die",
        ]
    );

    // the token right before the query is never paired
    let adjacent = fx.assignment(&inst, &[(5, "Attack"), (6, "Die")]);
    assert!(fx.generator().trigger_pair_features(&inst, &adjacent, 6).unwrap().is_empty());
}

#[test]
fn test_trigger_pair_history_dedup() {
    let fx = Fixture::new();
    let inst = attack_sentence(true);
    let assn = fx.assignment(&inst, &[(0, "Attack"), (1, "Attack"), (6, "Die")]);

    let features = fx.generator().trigger_pair_features(&inst, &assn, 6).unwrap();
    assert_eq!(with_prefix(&features, "triggerPair="), vec!["triggerPair=Attack#Die"]);
    assert_eq!(with_prefix(&features, "triggerPairSameClause=").len(), 2);
}

#[test]
fn test_same_clause_and_same_word() {
    let fx = Fixture::new();
    let words = vec![
        Token::new("war", "NN").with_clause(0).with_synonyms(["war", "warfare"]),
        Token::new("and", "CC").with_clause(0),
        Token::new("warfare", "NN").with_clause(0).with_synonyms(["warfare"]),
    ];
    let inst = SentenceInstance::new("war", words, Vec::new(), None).unwrap();

    let assn = fx.assignment(&inst, &[(0, "Attack"), (2, "Attack")]);
    let features = fx.generator().trigger_pair_features(&inst, &assn, 2).unwrap();
    assert!(features.contains(&"triggerPairSameClause=Attack#Attack#true".to_string()));
    assert!(features.contains(&"SameWordSameLabel=true".to_string()));
    assert!(with_prefix(&features, "triggerPairDepPath=").is_empty());

    let assn = fx.assignment(&inst, &[(0, "Attack")]);
    let features = fx.generator().trigger_pair_features(&inst, &assn, 2).unwrap();
    assert_eq!(features, vec!["SameWordSameLabel=false"]);
}

#[test]
fn test_path_distance_gate() {
    let fx = Fixture::new();
    let words: Vec<(&str, &str)> = vec![("w", "NN"); 6];
    let mut graph = DirectedGraph::with_nodes(6);
    for i in 0..5 {
        graph.add_edge(i, i + 1, "dep");
    }
    let inst = SentenceInstance::new("chain", tokens(&words), Vec::new(), Some(graph)).unwrap();

    let near = fx.assignment(&inst, &[(0, "Attack"), (3, "Die")]);
    let features = fx.generator().trigger_pair_features(&inst, &near, 3).unwrap();
    assert_eq!(
        with_prefix(&features, "triggerPairDepPath="),
        vec!["triggerPairDepPath=Attack#Die#dep#NN#dep#NN#dep"]
    );

    let far = fx.assignment(&inst, &[(0, "Attack"), (4, "Die")]);
    let features = fx.generator().trigger_pair_features(&inst, &far, 4).unwrap();
    assert!(with_prefix(&features, "triggerPairDepPath=").is_empty());
    assert_eq!(with_prefix(&features, "triggerPair=").len(), 1);
}

fn attack_die_assignment(fx: &Fixture, inst: &SentenceInstance, swap: bool) -> SentenceAssignment {
    let mut assn = fx.assignment(inst, &[(1, "Attack"), (6, "Die")]);
    let (attacker, agent) = if swap { (2, 0) } else { (0, 2) };
    fx.roles(&mut assn, inst, 1, &[(attacker, "Attacker"), (1, "Target")]);
    fx.roles(&mut assn, inst, 6, &[(agent, "Agent"), (3, "Victim")]);
    assn
}

#[test]
fn test_same_entity_across_triggers() {
    let fx = Fixture::new();
    let inst = attack_sentence(true);
    let assn = attack_die_assignment(&fx, &inst, false);

    let features = fx.generator().sentence_level_features(&inst, &assn, 6, 2).unwrap();
    assert_eq!(
        features,
        vec!["same_entity_triggers:Attack#Die", "same_entity_roles:AgentDie#AttackerAttack"]
    );
}

#[test]
fn test_same_entity_is_symmetric() {
    let fx = Fixture::new();
    let inst = attack_sentence(true);

    let forward = attack_die_assignment(&fx, &inst, false);
    let backward = attack_die_assignment(&fx, &inst, true);
    let gen = fx.generator();
    assert_eq!(
        gen.sentence_level_features(&inst, &forward, 6, 2).unwrap(),
        gen.sentence_level_features(&inst, &backward, 6, 0).unwrap()
    );
}

#[test]
fn test_same_mention_across_triggers() {
    let fx = Fixture::new();
    let inst = attack_sentence(true);
    let mut assn = fx.assignment(&inst, &[(1, "Attack"), (6, "Die")]);
    fx.roles(&mut assn, &inst, 1, &[(3, "Target")]);
    fx.roles(&mut assn, &inst, 6, &[(3, "Victim")]);

    let features = fx.generator().sentence_level_features(&inst, &assn, 6, 3).unwrap();
    assert_eq!(
        features,
        vec![
            "same_mention_triggers:Attack#Die",
            "same_mention_roles:TargetAttack#VictimDie",
            "same_mention_dep:conj",
        ]
    );
    // no counterpart for the earlier trigger
    assert!(fx.generator().sentence_level_features(&inst, &assn, 1, 3).unwrap().is_empty());
}

#[test]
fn test_disconnected_graph_drops_only_paths() {
    let fx = Fixture::new();
    let connected = attack_sentence(true);
    let disconnected = attack_sentence(false);
    let mut assn = fx.assignment(&connected, &[(1, "Attack"), (6, "Die")]);
    fx.roles(&mut assn, &connected, 1, &[(3, "Target")]);
    fx.roles(&mut assn, &connected, 6, &[(3, "Victim")]);
    let gen = fx.generator();

    let with_path = gen.token_features(&connected, &assn, 6).unwrap();
    let without_path = gen.token_features(&disconnected, &assn, 6).unwrap();
    let expected: Vec<&String> = with_path
        .iter()
        .filter(|f| !f.starts_with("triggerPairDepPath=") && !f.starts_with("same_mention_dep:"))
        .collect();
    assert_eq!(without_path.iter().collect::<Vec<_>>(), expected);
    assert!(with_path.len() > without_path.len());
}

/// Soldiers and police attacked
fn coordinated_sentence(parents: (&str, &str)) -> SentenceInstance {
    let mut graph = DirectedGraph::with_nodes(4);
    graph.add_edge(3, 0, "nsubj");
    graph.add_edge(0, 1, "cc");
    graph.add_edge(0, 2, "conj");
    SentenceInstance::new(
        "coordinated",
        tokens(&[("Soldiers", "NNS"), ("and", "CC"), ("police", "NNS"), ("attacked", "VBD")]),
        vec![entity(0, 1, parents.0), entity(2, 3, parents.1)],
        Some(graph),
    )
    .unwrap()
}

#[test]
fn test_same_role_features() {
    let fx = Fixture::new();
    let inst = coordinated_sentence(("E1", "E2"));
    let mut assn = fx.assignment(&inst, &[(3, "Attack")]);
    fx.roles(&mut assn, &inst, 3, &[(0, "Attacker"), (1, "Attacker")]);

    let features = fx.generator().node_level_features(&inst, &assn, 3, 1).unwrap();
    assert_eq!(
        features,
        vec!["sameRole:Attacker#between:and", "sameRole:Attacker#depPath:conj"]
    );
    assert!(fx.generator().node_level_features(&inst, &assn, 3, 0).unwrap().is_empty());
}

/// Seven chained nouns followed by an unattached trigger, with the two
/// argument mentions at `first` and `second`
fn chain_sentence(first: usize, second: usize) -> SentenceInstance {
    let mut graph = DirectedGraph::with_nodes(8);
    for i in 0..6 {
        graph.add_edge(i, i + 1, "dep");
    }
    let words = ["t0", "t1", "t2", "t3", "t4", "t5", "t6"];
    let mut toks: Vec<(&str, &str)> = words.iter().map(|w| (*w, "NN")).collect();
    toks.push(("attacked", "VBD"));
    SentenceInstance::new(
        "chain",
        tokens(&toks),
        vec![entity(first, first + 1, "E1"), entity(second, second + 1, "E2")],
        Some(graph),
    )
    .unwrap()
}

#[test]
fn test_same_role_window_and_path_limits() {
    let fx = Fixture::new();

    let near = chain_sentence(0, 3);
    let mut assn = fx.assignment(&near, &[(7, "Attack")]);
    fx.roles(&mut assn, &near, 7, &[(0, "Attacker"), (1, "Attacker")]);
    let features = fx.generator().node_level_features(&near, &assn, 7, 1).unwrap();
    assert_eq!(
        features,
        vec![
            "sameRole:Attacker#between:t1",
            "sameRole:Attacker#between:t2",
            "sameRole:Attacker#depPath:dep#NN#dep#NN#dep",
        ]
    );

    let far = chain_sentence(0, 4);
    let mut assn = fx.assignment(&far, &[(7, "Attack")]);
    fx.roles(&mut assn, &far, 7, &[(0, "Attacker"), (1, "Attacker")]);
    let features = fx.generator().node_level_features(&far, &assn, 7, 1).unwrap();
    assert!(with_prefix(&features, "sameRole:Attacker#between:").is_empty());
    assert!(with_prefix(&features, "sameRole:Attacker#depPath:").is_empty());
    assert!(features.is_empty());
}

#[test]
fn test_related_roles_window_and_path_limits() {
    let mut fx = Fixture::new();
    fx.config.enable_related_roles = true;

    let near = chain_sentence(0, 3);
    let mut assn = fx.assignment(&near, &[(7, "Attack")]);
    fx.roles(&mut assn, &near, 7, &[(0, "Target"), (1, "Attacker")]);
    let features = fx.generator().node_level_features(&near, &assn, 7, 1).unwrap();
    assert_eq!(with_prefix(&features, "relevantRoles:Attacker#Target#between:").len(), 2);
    assert_eq!(
        with_prefix(&features, "relevantRoles:Attacker#Target#depPath:"),
        vec!["relevantRoles:Attacker#Target#depPath:dep#NN#dep#NN#dep"]
    );

    let far = chain_sentence(0, 4);
    let mut assn = fx.assignment(&far, &[(7, "Attack")]);
    fx.roles(&mut assn, &far, 7, &[(0, "Target"), (1, "Attacker")]);
    let features = fx.generator().node_level_features(&far, &assn, 7, 1).unwrap();
    assert!(with_prefix(&features, "relevantRoles:").is_empty());
}

#[test]
fn test_same_role_overlapping_extents() {
    let fx = Fixture::new();
    let inst = SentenceInstance::new(
        "overlap",
        tokens(&[("the", "DT"), ("border", "NN"), ("guards", "NNS"), ("unit", "NN"), ("attacked", "VBD")]),
        vec![entity(0, 3, "E1"), entity(2, 4, "E2")],
        None,
    )
    .unwrap();
    let mut assn = fx.assignment(&inst, &[(4, "Attack")]);
    fx.roles(&mut assn, &inst, 4, &[(0, "Attacker"), (1, "Attacker")]);

    let features = fx.generator().node_level_features(&inst, &assn, 4, 1).unwrap();
    assert_eq!(with_prefix(&features, "sameRole:"), vec!["sameRole:Attacker#overlapped"]);
}

#[test]
fn test_one_entity_two_args() {
    let fx = Fixture::new();
    let inst = coordinated_sentence(("E1", "E1"));
    let mut assn = fx.assignment(&inst, &[(3, "Attack")]);
    fx.roles(&mut assn, &inst, 3, &[(0, "Attacker"), (1, "Target")]);

    let features = fx.generator().node_level_features(&inst, &assn, 3, 1).unwrap();
    assert_eq!(with_prefix(&features, "oneEntityTwoArgs:"), vec!["oneEntityTwoArgs:Attack"]);
    assert!(with_prefix(&features, "sameRole:").is_empty());

    let mut same = fx.assignment(&inst, &[(3, "Attack")]);
    fx.roles(&mut same, &inst, 3, &[(0, "Attacker"), (1, "Attacker")]);
    let features = fx.generator().node_level_features(&inst, &same, 3, 1).unwrap();
    assert!(with_prefix(&features, "oneEntityTwoArgs:").is_empty());
    assert!(features.contains(&"sameRole:Attacker#coreference".to_string()));
}

#[test]
fn test_related_roles_opt_in() {
    let mut fx = Fixture::new();
    let inst = coordinated_sentence(("E1", "E2"));
    let mut assn = fx.assignment(&inst, &[(3, "Attack")]);
    fx.roles(&mut assn, &inst, 3, &[(0, "Target"), (1, "Attacker")]);
    assert!(fx.generator().node_level_features(&inst, &assn, 3, 1).unwrap().is_empty());

    fx.config.enable_related_roles = true;
    let features = fx.generator().node_level_features(&inst, &assn, 3, 1).unwrap();
    assert_eq!(
        features,
        vec![
            "relevantRoles:Attacker#Target#between:and",
            "relevantRoles:Attacker#Target#depPath:conj",
        ]
    );
}

#[test]
fn test_head_modifier_overlap() {
    let fx = Fixture::new();
    // the IBM CEO resigned
    let inst = SentenceInstance::new(
        "ibm",
        tokens(&[("the", "DT"), ("IBM", "NNP"), ("CEO", "NN"), ("resigned", "VBD")]),
        vec![
            Mention::entity(Span::new(1, 2), Span::new(1, 2), "ORG").with_parent("E1"),
            Mention::entity(Span::new(0, 3), Span::new(2, 3), "PER").with_parent("E2"),
        ],
        None,
    )
    .unwrap();
    let mut assn = fx.assignment(&inst, &[(3, "End-Position")]);
    fx.roles(&mut assn, &inst, 3, &[(0, "Entity"), (1, "Person")]);

    let features = fx.generator().node_level_features(&inst, &assn, 3, 1).unwrap();
    assert_eq!(features, vec!["entitiesOverlap:modifier=Entity#head=Person"]);
}

#[test]
fn test_title_containment() {
    let fx = Fixture::new();
    // co-chief executive of Vivendi quit
    let inst = SentenceInstance::new(
        "title",
        tokens(&[("co-chief", "JJ"), ("executive", "NN"), ("of", "IN"), ("Vivendi", "NNP"), ("quit", "VBD")]),
        vec![
            Mention::value(Span::new(0, 2), "Job-Title"),
            Mention::entity(Span::new(0, 4), Span::new(1, 2), "PER").with_parent("E1"),
        ],
        None,
    )
    .unwrap();
    let mut assn = fx.assignment(&inst, &[(4, "End-Position")]);
    fx.roles(&mut assn, &inst, 4, &[(0, "Position"), (1, "Person")]);

    let features = fx.generator().node_level_features(&inst, &assn, 4, 1).unwrap();
    assert_eq!(features, vec!["entitiesOverlap:Title=Position#PER=Person"]);
}

#[test]
fn test_non_argument_trigger_is_skipped() {
    let mut fx = Fixture::new();
    fx.config.non_argument_labels = vec!["Attack".to_string()];
    let inst = coordinated_sentence(("E1", "E1"));
    let assn = fx.assignment(&inst, &[(3, "Attack")]);
    let gen = fx.generator();
    assert!(gen.node_level_features(&inst, &assn, 3, 1).unwrap().is_empty());
    assert!(gen.node_completion_features(&inst, &assn, 3).unwrap().is_empty());
}

#[test]
fn test_malformed_queries_fail_fast() {
    let fx = Fixture::new();
    let inst = fired_sentence();
    let assn = fx.assignment(&inst, &[(2, "End-Position")]);
    let gen = fx.generator();

    assert!(matches!(
        gen.trigger_pair_features(&inst, &assn, 9),
        Err(FeatureError::TokenOutOfRange { index: 9, len: 4 })
    ));
    assert!(matches!(
        gen.node_level_features(&inst, &assn, 2, 5),
        Err(FeatureError::EntityOutOfRange { index: 5, len: 2 })
    ));

    let short = SentenceAssignment::empty(3, &fx.alphabets, "O");
    assert!(matches!(
        gen.token_features(&inst, &short, 0),
        Err(FeatureError::AssignmentInvariant(_))
    ));
}

#[test]
fn test_extract_corpus_keeps_order() {
    let fx = Fixture::new();
    let fired = fired_sentence();
    let mut fired_assn = fx.assignment(&fired, &[(2, "End-Position")]);
    fx.roles(&mut fired_assn, &fired, 2, &[(0, "Person"), (1, "Time-Within")]);
    let attack = attack_sentence(true);
    let attack_assn = attack_die_assignment(&fx, &attack, false);

    let corpus = vec![
        LabeledSentence { instance: fired, assignment: fired_assn },
        LabeledSentence { instance: attack, assignment: attack_assn },
    ];
    let gen = fx.generator();
    let features = gen.extract_corpus(&corpus).unwrap();
    assert_eq!(features.len(), 2);
    for (sentence, extracted) in corpus.iter().zip(&features) {
        assert_eq!(extracted.len(), sentence.instance.len());
        assert_eq!(
            extracted,
            &gen.assignment_features(&sentence.instance, &sentence.assignment).unwrap()
        );
    }
}

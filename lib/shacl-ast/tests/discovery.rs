//! Shape discovery and facet extraction over parsed Turtle.

use oxrdf::{Graph, NamedNode, Term};
use oxrdfio::{RdfFormat, RdfParser};
use shacl_ast::{Facets, PropertyPath, ShapeId, ShapesGraph, Target};

fn parse_turtle(turtle: &str) -> Graph {
    let mut graph = Graph::new();
    let parser = RdfParser::from_format(RdfFormat::Turtle);
    for quad_result in parser.for_reader(turtle.as_bytes()) {
        let quad = quad_result.expect("Failed to parse turtle");
        graph.insert(quad.as_ref());
    }
    graph
}

fn nn(iri: &str) -> NamedNode {
    NamedNode::new_unchecked(iri)
}

#[test]
fn test_discovery_and_facets_from_turtle() {
    let graph = parse_turtle(
        r#"
        @prefix sh: <http://www.w3.org/ns/shacl#> .
        @prefix ex: <http://example.org/> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

        ex:PersonShape a sh:NodeShape ;
            sh:targetClass ex:Person ;
            sh:property [
                sh:path ex:name ;
                sh:datatype xsd:string ;
                sh:minCount 1 ;
                sh:maxCount 1
            ] ;
            sh:property [
                sh:path [ sh:inversePath ex:knows ] ;
                sh:nodeKind sh:IRI
            ] .
    "#,
    );

    let shapes = ShapesGraph::from_graph(&graph).unwrap();
    assert_eq!(shapes.node_shapes().len(), 1);

    let shape = &shapes.node_shapes()[0];
    assert_eq!(shape.id, ShapeId::Named(nn("http://example.org/PersonShape")));
    assert_eq!(
        shape.targets,
        [Target::Class(nn("http://example.org/Person"))]
    );

    let facets = Facets::of(&graph, &shape.id.to_term()).unwrap();
    assert_eq!(facets.properties.len(), 2);

    let mut paths: Vec<PropertyPath> = facets
        .properties
        .iter()
        .map(|id| {
            Facets::of(&graph, &id.to_term())
                .unwrap()
                .path
                .expect("property shape must carry a path")
        })
        .collect();
    paths.sort_by_key(ToString::to_string);
    assert_eq!(
        paths,
        [
            PropertyPath::Predicate(nn("http://example.org/name")),
            PropertyPath::inverse(PropertyPath::Predicate(nn("http://example.org/knows"))),
        ]
    );
}

#[test]
fn test_logical_lists_resolve_in_order() {
    let graph = parse_turtle(
        r#"
        @prefix sh: <http://www.w3.org/ns/shacl#> .
        @prefix ex: <http://example.org/> .

        ex:S a sh:NodeShape ;
            sh:or ( ex:A ex:B ex:C ) .
    "#,
    );
    let facets = Facets::of(&graph, &Term::NamedNode(nn("http://example.org/S"))).unwrap();
    let children = facets.or.unwrap();
    assert_eq!(
        children,
        [
            Term::NamedNode(nn("http://example.org/A")),
            Term::NamedNode(nn("http://example.org/B")),
            Term::NamedNode(nn("http://example.org/C")),
        ]
    );
}

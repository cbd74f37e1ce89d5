use graphql_print::ast::*;
use indoc::indoc;

fn vec_in<'a, T>(ctx: &'a ASTContext, items: Vec<T>) -> bumpalo::collections::Vec<'a, T> {
    bumpalo::collections::Vec::from_iter_in(items, &ctx.arena)
}

fn named<'a>(name: &'a str) -> NamedType<'a> {
    NamedType { name }
}

fn selections<'a>(ctx: &'a ASTContext, items: Vec<Selection<'a>>) -> SelectionSet<'a> {
    SelectionSet {
        selections: vec_in(ctx, items),
    }
}

fn leaf_field<'a>(ctx: &'a ASTContext, name: &'a str, of_type: Type<'a>) -> FieldDefinition<'a> {
    FieldDefinition {
        description: None,
        name,
        arguments: InputValueDefinitions::default_in(&ctx.arena),
        of_type,
        directives: Directives::default_in(&ctx.arena),
    }
}

#[test]
fn printed_query_reparses() {
    let ctx = ASTContext::new();

    let author = Field {
        selection_set: selections(&ctx, vec![Selection::Field(Field::new_leaf(&ctx, "name"))]),
        ..Field::new_leaf(&ctx, "author")
    };
    let inline = InlineFragment {
        type_condition: Some(named("Post")),
        directives: Directives::default_in(&ctx.arena),
        selection_set: selections(&ctx, vec![Selection::Field(author)]),
    };
    let posts = Field {
        arguments: Arguments {
            children: vec_in(
                &ctx,
                vec![Argument {
                    name: "first",
                    value: Value::Variable(Variable { name: "count" }),
                }],
            ),
        },
        selection_set: selections(
            &ctx,
            vec![
                Selection::Field(Field::new_leaf(&ctx, "id")),
                Selection::FragmentSpread(FragmentSpread {
                    name: named("PostDetails"),
                    directives: Directives::default_in(&ctx.arena),
                }),
                Selection::InlineFragment(inline),
            ],
        ),
        ..Field::new_leaf(&ctx, "posts")
    };
    let operation = OperationDefinition {
        operation: OperationKind::Query,
        name: Some(named("Posts")),
        variable_definitions: VariableDefinitions {
            children: vec_in(
                &ctx,
                vec![VariableDefinition {
                    variable: Variable { name: "count" },
                    of_type: Type::NamedType(named("Int")),
                    default_value: Value::Int(IntValue { value: "10" }),
                    directives: Directives::default_in(&ctx.arena),
                }],
            ),
        },
        directives: Directives::default_in(&ctx.arena),
        selection_set: selections(&ctx, vec![Selection::Field(posts)]),
    };
    let fragment = FragmentDefinition {
        name: named("PostDetails"),
        type_condition: named("Post"),
        directives: Directives::default_in(&ctx.arena),
        selection_set: selections(&ctx, vec![Selection::Field(Field::new_leaf(&ctx, "title"))]),
    };
    let document = Document {
        definitions: vec_in(
            &ctx,
            vec![
                Definition::Operation(operation),
                Definition::Fragment(fragment),
            ],
        ),
        size_hint: 0,
    };

    let printed = document.print();
    assert_eq!(
        printed,
        indoc! {"
            query Posts($count: Int = 10) {
              posts(first: $count) {
                id
                ...PostDetails
                ... on Post {
                  author {
                    name
                  }
                }
              }
            }

            fragment PostDetails on Post {
              title
            }"
        }
    );
    graphql_parser::parse_query::<&str>(&printed).expect("printed query must re-parse");
}

#[test]
fn printed_schema_reparses() {
    let ctx = ASTContext::new();

    let id = Type::NamedType(named("ID")).into_nonnull(&ctx);
    let int = Type::NamedType(named("Int"));

    let schema = SchemaDefinition {
        description: None,
        query_root: Some(named("QueryRoot")),
        mutation_root: None,
        subscription_root: None,
    };
    let scalar = ScalarTypeDefinition {
        description: None,
        name: "DateTime",
        directives: Directives::default_in(&ctx.arena),
    };
    let post = ObjectTypeDefinition {
        description: None,
        name: "Post",
        interfaces: vec_in(&ctx, vec![named("Node")]),
        directives: Directives::default_in(&ctx.arena),
        fields: FieldDefinitions {
            children: vec_in(
                &ctx,
                vec![
                    leaf_field(&ctx, "id", id),
                    leaf_field(
                        &ctx,
                        "title",
                        Type::NamedType(named("String")).into_nonnull(&ctx),
                    ),
                    FieldDefinition {
                        description: None,
                        name: "comments",
                        arguments: InputValueDefinitions {
                            children: vec_in(
                                &ctx,
                                vec![InputValueDefinition {
                                    description: None,
                                    name: "first",
                                    of_type: int,
                                    default_value: Value::Int(IntValue { value: "10" }),
                                    directives: Directives::default_in(&ctx.arena),
                                }],
                            ),
                        },
                        of_type: Type::NamedType(named("Comment"))
                            .into_nonnull(&ctx)
                            .into_list(&ctx),
                        directives: Directives::default_in(&ctx.arena),
                    },
                ],
            ),
        },
    };
    let node = InterfaceTypeDefinition {
        description: None,
        name: "Node",
        directives: Directives::default_in(&ctx.arena),
        fields: FieldDefinitions {
            children: vec_in(&ctx, vec![leaf_field(&ctx, "id", id)]),
        },
    };
    let search_result = UnionTypeDefinition {
        description: None,
        name: "SearchResult",
        directives: Directives::default_in(&ctx.arena),
        types: vec_in(&ctx, vec![named("Photo"), named("Person")]),
    };
    let color = EnumTypeDefinition {
        description: None,
        name: "Color",
        directives: Directives::default_in(&ctx.arena),
        values: EnumValueDefinitions {
            children: vec_in(
                &ctx,
                ["RED", "GREEN"]
                    .map(|value| EnumValueDefinition {
                        description: None,
                        value: EnumValue { value },
                        directives: Directives::default_in(&ctx.arena),
                    })
                    .into(),
            ),
        },
    };
    let point = InputObjectTypeDefinition {
        description: None,
        name: "Point",
        directives: Directives::default_in(&ctx.arena),
        fields: InputValueDefinitions {
            children: vec_in(
                &ctx,
                vec![
                    InputValueDefinition {
                        description: None,
                        name: "x",
                        of_type: Type::NamedType(named("Int")).into_nonnull(&ctx),
                        default_value: Value::Int(IntValue { value: "0" }),
                        directives: Directives::default_in(&ctx.arena),
                    },
                    InputValueDefinition {
                        description: None,
                        name: "y",
                        of_type: Type::NamedType(named("Int")).into_nonnull(&ctx),
                        default_value: Value::Null,
                        directives: Directives::default_in(&ctx.arena),
                    },
                ],
            ),
        },
    };
    let cache_control = DirectiveDefinition {
        description: None,
        name: "cacheControl",
        arguments: InputValueDefinitions {
            children: vec_in(
                &ctx,
                vec![InputValueDefinition {
                    description: None,
                    name: "maxAge",
                    of_type: int,
                    default_value: Value::Null,
                    directives: Directives::default_in(&ctx.arena),
                }],
            ),
        },
        locations: vec_in(
            &ctx,
            vec![
                DirectiveLocation::Object,
                DirectiveLocation::FieldDefinition,
            ],
        ),
    };
    let document = Document {
        definitions: vec_in(
            &ctx,
            vec![
                Definition::TypeSystem(TypeSystemDefinition::Schema(schema)),
                Definition::TypeSystem(TypeSystemDefinition::Scalar(scalar)),
                Definition::TypeSystem(TypeSystemDefinition::Object(post)),
                Definition::TypeSystem(TypeSystemDefinition::Interface(node)),
                Definition::TypeSystem(TypeSystemDefinition::Union(search_result)),
                Definition::TypeSystem(TypeSystemDefinition::Enum(color)),
                Definition::TypeSystem(TypeSystemDefinition::InputObject(point)),
                Definition::TypeSystem(TypeSystemDefinition::Directive(cache_control)),
            ],
        ),
        size_hint: 0,
    };

    let printed = document.print();
    assert_eq!(
        printed,
        indoc! {"
            schema {
              query: QueryRoot
            }

            scalar DateTime

            type Post implements Node {
              id: ID!
              title: String!
              comments(first: Int = 10): [Comment!]
            }

            interface Node {
              id: ID!
            }

            union SearchResult = Photo | Person

            enum Color {
              RED
              GREEN
            }

            input Point {
              x: Int! = 0
              y: Int!
            }

            directive @cacheControl(maxAge: Int) on OBJECT | FIELD_DEFINITION"
        }
    );
    graphql_parser::parse_schema::<&str>(&printed).expect("printed schema must re-parse");
}

#[test]
fn default_root_schema_is_omitted() {
    let ctx = ASTContext::new();
    let schema = SchemaDefinition {
        description: None,
        query_root: Some(named("Query")),
        mutation_root: Some(named("Mutation")),
        subscription_root: None,
    };
    let scalar = ScalarTypeDefinition {
        description: None,
        name: "JSON",
        directives: Directives::default_in(&ctx.arena),
    };
    let document = Document {
        definitions: vec_in(
            &ctx,
            vec![
                Definition::TypeSystem(TypeSystemDefinition::Schema(schema)),
                Definition::TypeSystem(TypeSystemDefinition::Scalar(scalar)),
            ],
        ),
        size_hint: 0,
    };
    let printed = document.print();
    assert_eq!(printed, "scalar JSON");
    graphql_parser::parse_schema::<&str>(&printed).expect("printed schema must re-parse");
}
